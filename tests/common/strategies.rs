//! Proptest strategies for search criteria and page windows

use member_search::models::MemberSearchCondition;
use member_search::query_builder::PageRequest;
use proptest::prelude::*;

pub const TEAM_NAMES: &[&str] = &["teamA", "teamB", "teamC"];

/// (username, age, team index or none)
pub type MemberSeed = (String, i32, Option<usize>);

pub fn member_seed_strategy() -> impl Strategy<Value = MemberSeed> {
    (
        "member[0-9]",
        0i32..60,
        prop::option::of(0usize..TEAM_NAMES.len()),
    )
}

pub fn members_strategy() -> impl Strategy<Value = Vec<MemberSeed>> {
    prop::collection::vec(member_seed_strategy(), 0..25)
}

pub fn criteria_strategy() -> impl Strategy<Value = MemberSearchCondition> {
    (
        prop::option::of("member[0-9]|   "),
        prop::option::of(prop::sample::select(TEAM_NAMES).prop_map(str::to_string)),
        prop::option::of(0i32..60),
        prop::option::of(0i32..60),
    )
        .prop_map(|(username, team_name, age_goe, age_loe)| MemberSearchCondition {
            username,
            team_name,
            age_goe,
            age_loe,
        })
}

pub fn page_strategy() -> impl Strategy<Value = PageRequest> {
    (0u64..30, 1u64..10).prop_map(|(offset, limit)| {
        PageRequest::new(offset, limit).expect("limit is positive")
    })
}
