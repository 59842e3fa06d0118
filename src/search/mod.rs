//! # Member Search
//!
//! Criteria-driven search over the member LEFT JOIN team projection.
//!
//! ## Key Components
//!
//! - [`SearchQueryFacade`] - Builds filters from [`MemberSearchCondition`](crate::models::MemberSearchCondition) and paginates
//! - [`SearchExecutor`] - Execution capability the facade delegates to
//! - [`PgSearchExecutor`] / [`InMemorySearchExecutor`] - PostgreSQL and in-process backends
//! - [`PaginationStrategy`] - Single-execution or content-then-count paging
//!
//! ## Example Usage
//!
//! ```rust
//! use member_search::models::{MemberSearchCondition, NewMember, NewTeam};
//! use member_search::query_builder::PageRequest;
//! use member_search::search::{InMemorySearchExecutor, SearchQueryFacade};
//!
//! # tokio_test::block_on(async {
//! let executor = InMemorySearchExecutor::new();
//! let team = executor.insert_team(NewTeam::new("teamA"));
//! executor.insert_member(NewMember::new("member1", 20).in_team(team.team_id));
//!
//! let facade = SearchQueryFacade::new(executor);
//! let criteria = MemberSearchCondition::new().with_team_name("teamA");
//! let page = facade
//!     .search_page(&criteria, PageRequest::new(0, 10).unwrap())
//!     .await
//!     .unwrap();
//! assert_eq!(page.total_count, 1);
//! # });
//! ```

pub mod executor;
pub mod facade;
pub mod memory;
pub mod postgres;
pub mod strategy;

pub use executor::SearchExecutor;
pub use facade::{FacadeSettings, SearchQueryFacade};
pub use memory::InMemorySearchExecutor;
pub use postgres::PgSearchExecutor;
pub use strategy::PaginationStrategy;
