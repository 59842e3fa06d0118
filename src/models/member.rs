use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::logging::log_database_operation;

/// Member is the primary searchable record.
/// Maps to `members` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
}

/// New Member for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMember {
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
}

impl NewMember {
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: username.into(),
            age,
            team_id: None,
        }
    }

    pub fn in_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

impl Member {
    /// Create a new member
    pub async fn create(pool: &PgPool, new_member: NewMember) -> Result<Member, sqlx::Error> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (username, age, team_id)
            VALUES ($1, $2, $3)
            RETURNING member_id, username, age, team_id
            "#,
        )
        .bind(new_member.username)
        .bind(new_member.age)
        .bind(new_member.team_id)
        .fetch_one(pool)
        .await?;

        log_database_operation("create", "members", Some(member.member_id), Some(1));
        Ok(member)
    }

    /// Find a member by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            "SELECT member_id, username, age, team_id FROM members WHERE member_id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all members
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            "SELECT member_id, username, age, team_id FROM members ORDER BY member_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Find members by exact username
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT member_id, username, age, team_id
            FROM members
            WHERE username = $1
            ORDER BY member_id
            "#,
        )
        .bind(username)
        .fetch_all(pool)
        .await
    }

    /// Bulk update: rename every member strictly younger than `age`.
    ///
    /// Returns the number of rows updated.
    pub async fn bulk_rename_younger_than(
        pool: &PgPool,
        age: i32,
        new_username: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE members SET username = $1 WHERE age < $2")
            .bind(new_username)
            .bind(age)
            .execute(pool)
            .await?;

        log_database_operation(
            "bulk_rename_younger_than",
            "members",
            None,
            Some(result.rows_affected()),
        );
        Ok(result.rows_affected())
    }

    /// Bulk update: add `delta` to every member's age.
    ///
    /// Returns the number of rows updated.
    pub async fn bulk_add_age(pool: &PgPool, delta: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE members SET age = age + $1")
            .bind(delta)
            .execute(pool)
            .await?;

        log_database_operation("bulk_add_age", "members", None, Some(result.rows_affected()));
        Ok(result.rows_affected())
    }

    /// Delete a member
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_builder() {
        let new_member = NewMember::new("member1", 20).in_team(7);
        assert_eq!(new_member.username, "member1");
        assert_eq!(new_member.age, 20);
        assert_eq!(new_member.team_id, Some(7));
    }

    #[test]
    fn test_new_member_defaults_to_no_team() {
        assert_eq!(NewMember::new("loner", 40).team_id, None);
    }
}
