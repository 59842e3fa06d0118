//! In-process execution capability over plain vectors.
//!
//! Mirrors the PostgreSQL executor's semantics (left join, insertion order,
//! offset-then-limit) so facade behavior can be exercised without a database.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::SearchExecutor;
use crate::error::Result;
use crate::models::{Member, MemberTeamRow, NewMember, NewTeam, Team};
use crate::query_builder::{FilterPredicate, PageRequest};

#[derive(Debug, Default)]
struct MemoryTables {
    teams: Vec<Team>,
    members: Vec<Member>,
    next_team_id: i64,
    next_member_id: i64,
}

impl MemoryTables {
    fn team(&self, team_id: Option<i64>) -> Option<&Team> {
        team_id.and_then(|id| self.teams.iter().find(|t| t.team_id == id))
    }

    fn project(&self, filter: &FilterPredicate) -> Vec<MemberTeamRow> {
        self.members
            .iter()
            .map(|m| MemberTeamRow::from_parts(m, self.team(m.team_id)))
            .filter(|row| filter.matches(row))
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemorySearchExecutor {
    tables: RwLock<MemoryTables>,
}

impl InMemorySearchExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_team(&self, new_team: NewTeam) -> Team {
        let mut tables = self.tables.write();
        tables.next_team_id += 1;
        let team = Team {
            team_id: tables.next_team_id,
            name: new_team.name,
        };
        tables.teams.push(team.clone());
        team
    }

    /// Insert a member. An unknown `team_id` behaves like a dangling
    /// reference and yields no team columns on search.
    pub fn insert_member(&self, new_member: NewMember) -> Member {
        let mut tables = self.tables.write();
        tables.next_member_id += 1;
        let member = Member {
            member_id: tables.next_member_id,
            username: new_member.username,
            age: new_member.age,
            team_id: new_member.team_id,
        };
        tables.members.push(member.clone());
        member
    }

    pub fn members(&self) -> Vec<Member> {
        self.tables.read().members.clone()
    }

    pub fn teams(&self) -> Vec<Team> {
        self.tables.read().teams.clone()
    }

    /// Add `delta` to every member's age, returning the number of rows touched.
    /// Ages saturate at the `i32` bounds.
    pub fn bulk_add_age(&self, delta: i32) -> u64 {
        let mut tables = self.tables.write();
        for member in tables.members.iter_mut() {
            member.age = member.age.saturating_add(delta);
        }
        tables.members.len() as u64
    }

    /// Rename every member younger than `age`, returning the number of rows touched
    pub fn bulk_rename_younger_than(&self, age: i32, username: &str) -> u64 {
        let mut tables = self.tables.write();
        let mut touched = 0;
        for member in tables.members.iter_mut().filter(|m| m.age < age) {
            member.username = username.to_string();
            touched += 1;
        }
        touched
    }

    pub fn clear(&self) {
        *self.tables.write() = MemoryTables::default();
    }
}

fn window(rows: Vec<MemberTeamRow>, page: PageRequest) -> Vec<MemberTeamRow> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    rows.into_iter().skip(offset).take(limit).collect()
}

#[async_trait]
impl SearchExecutor for InMemorySearchExecutor {
    async fn fetch_rows(
        &self,
        filter: &FilterPredicate,
        window_request: Option<PageRequest>,
    ) -> Result<Vec<MemberTeamRow>> {
        let rows = self.tables.read().project(filter);
        Ok(match window_request {
            Some(page) => window(rows, page),
            None => rows,
        })
    }

    async fn count(&self, filter: &FilterPredicate) -> Result<u64> {
        Ok(self.tables.read().project(filter).len() as u64)
    }

    async fn fetch_window_with_total(
        &self,
        filter: &FilterPredicate,
        page: PageRequest,
    ) -> Result<(Vec<MemberTeamRow>, u64)> {
        let rows = self.tables.read().project(filter);
        let total = rows.len() as u64;
        Ok((window(rows, page), total))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
