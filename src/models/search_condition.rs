use serde::{Deserialize, Serialize};

/// Optional, independently-present search criteria combined conjunctively.
///
/// Absent fields place no constraint on the result. Text fields that are empty
/// or whitespace-only count as absent; present text is compared as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username, if it has any non-whitespace text
    pub fn username_text(&self) -> Option<&str> {
        has_text(self.username.as_deref())
    }

    /// Team name, if it has any non-whitespace text
    pub fn team_name_text(&self) -> Option<&str> {
        has_text(self.team_name.as_deref())
    }

    /// True when both age bounds are present and cannot be satisfied together
    pub fn has_inverted_age_range(&self) -> bool {
        matches!((self.age_goe, self.age_loe), (Some(goe), Some(loe)) if goe > loe)
    }
}

fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
