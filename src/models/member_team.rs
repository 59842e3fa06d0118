use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Member, Team};

/// Flattened member LEFT JOIN team projection returned by every search.
///
/// Members without a team carry `None` in both team columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl MemberTeamRow {
    /// Join a member to its (optional) team
    pub fn from_parts(member: &Member, team: Option<&Team>) -> Self {
        Self {
            member_id: member.member_id,
            username: member.username.clone(),
            age: member.age,
            team_id: team.map(|t| t.team_id),
            team_name: team.map(|t| t.name.clone()),
        }
    }
}
