//! # Schema Bootstrap
//!
//! Idempotent creation of the `teams` and `members` tables.
//!
//! Concurrent callers (parallel test binaries, several service instances) are
//! serialized with a PostgreSQL advisory lock held on a single pooled
//! connection for the duration of the bootstrap:
//!
//! ```sql
//! SELECT pg_advisory_lock(7342001);
//! CREATE TABLE IF NOT EXISTS teams (...);
//! CREATE TABLE IF NOT EXISTS members (...);
//! SELECT pg_advisory_unlock(7342001);
//! ```

use sqlx::PgPool;
use tracing::{debug, info};

const SCHEMA_LOCK_KEY: i64 = 7_342_001;

const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS teams (
        team_id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS members (
        member_id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL,
        age INTEGER NOT NULL DEFAULT 0,
        team_id BIGINT NULL REFERENCES teams (team_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_members_team_id ON members (team_id)",
    "CREATE INDEX IF NOT EXISTS idx_members_username ON members (username)",
    "CREATE INDEX IF NOT EXISTS idx_teams_name ON teams (name)",
];

/// Manages the member/team schema.
pub struct DatabaseMigrations;

impl DatabaseMigrations {
    /// Create tables and indexes if they do not exist yet
    pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
        let mut conn = pool.acquire().await?;

        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *conn)
            .await?;

        let mut result = Ok(());
        for statement in SCHEMA_STATEMENTS {
            if let Err(e) = sqlx::query(statement).execute(&mut *conn).await {
                result = Err(e);
                break;
            }
        }

        // Always release the lock
        sqlx::query("SELECT pg_advisory_unlock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *conn)
            .await?;

        if result.is_ok() {
            info!("Member/team schema is up to date");
        }
        result
    }

    /// Remove all rows and restart id sequences
    pub async fn truncate_all(pool: &PgPool) -> Result<(), sqlx::Error> {
        debug!("Truncating members and teams");
        sqlx::query("TRUNCATE members, teams RESTART IDENTITY CASCADE")
            .execute(pool)
            .await?;
        Ok(())
    }
}
