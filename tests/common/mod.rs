//! Shared fixtures for search integration tests
#![allow(dead_code)]

pub mod recording_executor;
pub mod strategies;

use member_search::models::{NewMember, NewTeam};
use member_search::search::InMemorySearchExecutor;

/// teamA: member1 (20), member2 (22); teamB: member3 (23), member4 (24)
pub fn seeded_executor() -> InMemorySearchExecutor {
    let executor = InMemorySearchExecutor::new();
    let team_a = executor.insert_team(NewTeam::new("teamA"));
    let team_b = executor.insert_team(NewTeam::new("teamB"));

    executor.insert_member(NewMember::new("member1", 20).in_team(team_a.team_id));
    executor.insert_member(NewMember::new("member2", 22).in_team(team_a.team_id));
    executor.insert_member(NewMember::new("member3", 23).in_team(team_b.team_id));
    executor.insert_member(NewMember::new("member4", 24).in_team(team_b.team_id));
    executor
}
