use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::logging::log_database_operation;

/// Team groups members; a member belongs to at most one team.
/// Maps to `teams` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
}

/// New Team for creation (without generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Team {
    /// Create a new team
    pub async fn create(pool: &PgPool, new_team: NewTeam) -> Result<Team, sqlx::Error> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name)
            VALUES ($1)
            RETURNING team_id, name
            "#,
        )
        .bind(new_team.name)
        .fetch_one(pool)
        .await?;

        log_database_operation("create", "teams", Some(team.team_id), Some(1));
        Ok(team)
    }

    /// Find a team by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>("SELECT team_id, name FROM teams WHERE team_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a team by name
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "SELECT team_id, name FROM teams WHERE name = $1 ORDER BY team_id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }

    /// List all teams
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>("SELECT team_id, name FROM teams ORDER BY team_id")
            .fetch_all(pool)
            .await
    }
}
