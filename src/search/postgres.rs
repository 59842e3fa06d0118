//! PostgreSQL execution capability.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use super::SearchExecutor;
use crate::error::{Result, SearchError};
use crate::models::MemberTeamRow;
use crate::query_builder::{FilterPredicate, PageRequest, SelectQuery};

/// Row shape of a combined fetch: the projection plus `COUNT(*) OVER ()`
#[derive(Debug, FromRow)]
struct WindowedMemberTeamRow {
    #[sqlx(flatten)]
    row: MemberTeamRow,
    total_count: i64,
}

/// Executes search queries against a pooled PostgreSQL connection.
///
/// Every query is ordered by member id so windows are stable across calls.
#[derive(Debug, Clone)]
pub struct PgSearchExecutor {
    pool: PgPool,
}

impl PgSearchExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn content_query(filter: &FilterPredicate, window: Option<PageRequest>) -> SelectQuery {
        let query = SelectQuery::member_team(filter.clone()).stable_order();
        match window {
            Some(page) => query.paginate(page),
            None => query,
        }
    }
}

fn execution_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> SearchError {
    move |e| SearchError::query_execution(operation, e.to_string())
}

#[async_trait]
impl SearchExecutor for PgSearchExecutor {
    async fn fetch_rows(
        &self,
        filter: &FilterPredicate,
        window: Option<PageRequest>,
    ) -> Result<Vec<MemberTeamRow>> {
        let query = Self::content_query(filter, window);
        debug!(sql = %query.sql(), "Executing member/team listing");

        let mut builder = query.build();
        builder
            .build_query_as::<MemberTeamRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(execution_error("fetch_rows"))
    }

    async fn count(&self, filter: &FilterPredicate) -> Result<u64> {
        let query = Self::content_query(filter, None).count_query();
        debug!(sql = %query.sql(), "Executing member/team count");

        let mut builder = query.build();
        let (count,): (i64,) = builder
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(execution_error("count"))?;

        Ok(count.max(0) as u64)
    }

    async fn fetch_window_with_total(
        &self,
        filter: &FilterPredicate,
        page: PageRequest,
    ) -> Result<(Vec<MemberTeamRow>, u64)> {
        let query = Self::content_query(filter, Some(page)).with_total_count();
        debug!(sql = %query.sql(), "Executing windowed member/team listing with total");

        let mut builder = query.build();
        let rows = builder
            .build_query_as::<WindowedMemberTeamRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(execution_error("fetch_window_with_total"))?;

        // A window past the last row carries no total column to read from
        let total = match rows.first() {
            Some(first) => first.total_count.max(0) as u64,
            None if page.offset() == 0 => 0,
            None => self.count(filter).await?,
        };

        Ok((rows.into_iter().map(|r| r.row).collect(), total))
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
