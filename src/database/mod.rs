//! # Database Operations
//!
//! Connection management and schema bootstrap for the member/team store.
//!
//! ## Key Components
//!
//! - [`connection`] - Pool construction from [`SearchConfig`](crate::config::SearchConfig)
//! - [`migrations`] - Idempotent table creation guarded by an advisory lock
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use member_search::config::ConfigManager;
//! use member_search::database::DatabaseConnection;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let db = DatabaseConnection::new(manager.config()).await?;
//! assert!(db.health_check().await?);
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod migrations;

pub use connection::DatabaseConnection;
pub use migrations::DatabaseMigrations;
