//! # Schema and Search Constants
//!
//! Table names, aliases and column references shared by the query builder, the
//! PostgreSQL executor and the schema bootstrap.

/// Table names and the aliases used in every generated query
pub mod tables {
    pub const MEMBERS: &str = "members";
    pub const TEAMS: &str = "teams";

    pub const MEMBER_ALIAS: &str = "m";
    pub const TEAM_ALIAS: &str = "t";
}

/// Fully qualified column references (alias.column)
pub mod columns {
    pub const MEMBER_ID: &str = "m.member_id";
    pub const MEMBER_USERNAME: &str = "m.username";
    pub const MEMBER_AGE: &str = "m.age";
    pub const MEMBER_TEAM_ID: &str = "m.team_id";
    pub const TEAM_ID: &str = "t.team_id";
    pub const TEAM_NAME: &str = "t.name";
}

/// Projection shared by the listing and paging queries
pub const MEMBER_TEAM_PROJECTION: &[&str] = &[
    "m.member_id",
    "m.username",
    "m.age",
    "t.team_id",
    "t.name AS team_name",
];

/// Column alias carrying the window-function total in combined fetches
pub const TOTAL_COUNT_COLUMN: &str = "total_count";

/// Pagination defaults used when no configuration overrides them
pub mod pagination {
    pub const DEFAULT_PAGE_SIZE: u64 = 20;
    pub const MAX_PAGE_SIZE: u64 = 500;
}
