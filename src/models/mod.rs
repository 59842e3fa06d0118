//! # Data Models
//!
//! Member/Team records, the flattened search projection and the search criteria.

pub mod member;
pub mod member_team;
pub mod search_condition;
pub mod team;

// Re-export core models for easy access
pub use member::{Member, NewMember};
pub use member_team::MemberTeamRow;
pub use search_condition::MemberSearchCondition;
pub use team::{NewTeam, Team};
