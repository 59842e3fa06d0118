//! # Query Builder System
//!
//! Conjunctive filter predicates and parametrized SELECT assembly for the
//! member/team search queries.
//!
//! ## Key Components
//!
//! - [`conditions`] - Search clauses and their AND-only combination
//! - [`joins`] - JOIN clauses with fan-out cardinality
//! - [`pagination`] - Offset/limit windows and result pages
//! - [`builder`] - SELECT assembly with bound parameters and derived count queries
//!
//! ## Example Usage
//!
//! ```rust
//! use member_search::query_builder::{Condition, FilterPredicate, PageRequest, SelectQuery};
//!
//! let filter = FilterPredicate::and(vec![
//!     Condition::TeamNameEq("teamA".to_string()),
//!     Condition::AgeGoe(20),
//! ]);
//! let page = PageRequest::new(0, 10).unwrap();
//! let content = SelectQuery::member_team(filter).stable_order().paginate(page);
//! let count = content.count_query();
//! assert!(count.sql().starts_with("SELECT COUNT(*)"));
//! ```

pub mod builder;
pub mod conditions;
pub mod joins;
pub mod pagination;

pub use builder::SelectQuery;
pub use conditions::{ComparisonOperator, Condition, FilterPredicate, SqlValue};
pub use joins::{Join, JoinCardinality, JoinType};
pub use pagination::{Page, PageRequest};
