use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::info;

use super::DatabaseMigrations;
use crate::config::SearchConfig;
use crate::error::Result;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Open a pool sized and timed from configuration
    pub async fn new(config: &SearchConfig) -> Result<Self> {
        let database_url = config.database_url()?;

        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .acquire_timeout(config.database.acquire_timeout())
            .connect(&database_url)
            .await?;

        info!(
            max_connections = config.database.max_connections,
            min_connections = config.database.min_connections,
            "Database pool established"
        );

        if config.database.run_migrations {
            DatabaseMigrations::run(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<bool> {
        let row = sqlx::query("SELECT 1 as health")
            .fetch_one(&self.pool)
            .await?;

        let health: i32 = row.get("health");
        Ok(health == 1)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
