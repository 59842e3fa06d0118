//! # Search Configuration
//!
//! Layered configuration for the search layer: built-in defaults, optional TOML
//! files per environment, then `MEMBER_SEARCH_*` environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use member_search::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let database_url = manager.config().database_url()?;
//! let page_size = manager.config().pagination.default_page_size;
//! # Ok(())
//! # }
//! ```

pub mod loader;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{Result, SearchError};
use crate::search::PaginationStrategy;

pub use loader::ConfigManager;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
    pub criteria: CriteriaConfig,
    pub logging: LoggingConfig,
}

/// Database connection and pooling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL. Falls back to `DATABASE_URL` when unset.
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    /// Run the member/team schema bootstrap when connecting
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_seconds: 5,
            run_migrations: false,
        }
    }
}

impl DatabaseConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u64,
    pub max_page_size: u64,
    pub strategy: PaginationStrategy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            strategy: PaginationStrategy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CriteriaConfig {
    /// Reject `age_goe > age_loe` instead of running a query that matches nothing
    pub reject_inverted_age_range: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive; derived from the environment when unset
    pub level: Option<String>,
    pub format: LogFormat,
}

impl SearchConfig {
    /// Resolve the database URL from configuration or `DATABASE_URL`
    pub fn database_url(&self) -> Result<String> {
        if let Some(url) = self.database.url.as_ref().filter(|u| !u.trim().is_empty()) {
            return Ok(url.clone());
        }
        std::env::var("DATABASE_URL").map_err(|_| {
            SearchError::configuration(
                "no database url configured (set database.url or DATABASE_URL)",
            )
        })
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.pagination.default_page_size == 0 {
            return Err(SearchError::configuration(
                "pagination.default_page_size must be positive",
            ));
        }
        if self.pagination.default_page_size > self.pagination.max_page_size {
            return Err(SearchError::configuration(format!(
                "pagination.default_page_size ({}) exceeds pagination.max_page_size ({})",
                self.pagination.default_page_size, self.pagination.max_page_size
            )));
        }
        if self.database.max_connections == 0 {
            return Err(SearchError::configuration(
                "database.max_connections must be positive",
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(SearchError::configuration(format!(
                "database.min_connections ({}) exceeds database.max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }
        Ok(())
    }
}
