#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Member Search Core
//!
//! Dynamic predicate composition and paginated search over members and the
//! team each of them optionally belongs to.
//!
//! ## Overview
//!
//! Callers describe what they want with a [`MemberSearchCondition`]: any
//! combination of username, team name and an age range. Absent or blank
//! criteria place no constraint. The search facade turns the present
//! criteria into a conjunctive [`FilterPredicate`] and runs it over the
//! member LEFT JOIN team projection, either in full or one window at a time.
//!
//! ## Module Organization
//!
//! - [`models`] - Member/Team records, the search projection and criteria
//! - [`query_builder`] - Conditions, joins, pagination and SQL assembly
//! - [`search`] - The facade, execution backends and pagination strategies
//! - [`database`] - Pool construction and schema bootstrap
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup and helpers
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use member_search::config::ConfigManager;
//! use member_search::database::DatabaseConnection;
//! use member_search::models::MemberSearchCondition;
//! use member_search::query_builder::PageRequest;
//! use member_search::search::{PgSearchExecutor, SearchQueryFacade};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! member_search::logging::init_structured_logging(&manager.config().logging);
//!
//! let db = DatabaseConnection::new(manager.config()).await?;
//! let facade = SearchQueryFacade::from_config(
//!     PgSearchExecutor::new(db.pool().clone()),
//!     manager.config(),
//! );
//!
//! let criteria = MemberSearchCondition::new().with_team_name("teamA").with_age_goe(20);
//! let page = facade.search_page(&criteria, PageRequest::new(0, 20)?).await?;
//! println!("{} of {} members", page.len(), page.total_count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test                                # Unit and in-memory tests
//! cargo test --features postgres-tests      # Adds PostgreSQL integration tests
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;
pub mod search;

pub use config::{ConfigManager, SearchConfig};
pub use error::{Result, SearchError};
pub use models::{Member, MemberSearchCondition, MemberTeamRow, Team};
pub use query_builder::{FilterPredicate, Page, PageRequest};
pub use search::{
    InMemorySearchExecutor, PaginationStrategy, PgSearchExecutor, SearchExecutor,
    SearchQueryFacade,
};
