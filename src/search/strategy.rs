use serde::{Deserialize, Serialize};

use crate::query_builder::{JoinCardinality, SelectQuery};

/// How a page and its total are fetched.
///
/// `Combined` answers both from one execution and is only correct when no
/// join can multiply rows. `Split` runs a windowed content query and a
/// separate count query, skipping the count when the window already proves
/// the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStrategy {
    Combined,
    #[default]
    Split,
}

impl PaginationStrategy {
    /// Pick the cheapest correct strategy for a join of the given cardinality
    pub fn for_join(cardinality: JoinCardinality) -> Self {
        if cardinality.fans_out() {
            PaginationStrategy::Split
        } else {
            PaginationStrategy::Combined
        }
    }

    /// `Split` as soon as any join in the query fans out
    pub fn for_query(query: &SelectQuery) -> Self {
        if query.joins().iter().any(|j| j.cardinality.fans_out()) {
            PaginationStrategy::Split
        } else {
            PaginationStrategy::Combined
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaginationStrategy::Combined => "combined",
            PaginationStrategy::Split => "split",
        }
    }
}
