use async_trait::async_trait;

use crate::error::Result;
use crate::models::MemberTeamRow;
use crate::query_builder::{FilterPredicate, PageRequest};

/// Query execution capability the search facade delegates to.
///
/// Implementations own connection handling, timeouts and ordering. The facade
/// only decides which of these calls to make and how to combine their results.
#[async_trait]
pub trait SearchExecutor: Send + Sync {
    /// Filtered member LEFT JOIN team projection, optionally windowed
    async fn fetch_rows(
        &self,
        filter: &FilterPredicate,
        window: Option<PageRequest>,
    ) -> Result<Vec<MemberTeamRow>>;

    /// Number of rows `fetch_rows(filter, None)` would return
    async fn count(&self, filter: &FilterPredicate) -> Result<u64>;

    /// One window plus the pre-window total from the same execution.
    ///
    /// The default issues `fetch_rows` followed by `count`; backends that can
    /// compute both in one round-trip should override it.
    async fn fetch_window_with_total(
        &self,
        filter: &FilterPredicate,
        page: PageRequest,
    ) -> Result<(Vec<MemberTeamRow>, u64)> {
        let rows = self.fetch_rows(filter, Some(page)).await?;
        let total = self.count(filter).await?;
        Ok((rows, total))
    }

    /// Get the backend name for logging/debugging
    fn backend_name(&self) -> &'static str;
}

#[async_trait]
impl<T: SearchExecutor + ?Sized> SearchExecutor for std::sync::Arc<T> {
    async fn fetch_rows(
        &self,
        filter: &FilterPredicate,
        window: Option<PageRequest>,
    ) -> Result<Vec<MemberTeamRow>> {
        (**self).fetch_rows(filter, window).await
    }

    async fn count(&self, filter: &FilterPredicate) -> Result<u64> {
        (**self).count(filter).await
    }

    async fn fetch_window_with_total(
        &self,
        filter: &FilterPredicate,
        page: PageRequest,
    ) -> Result<(Vec<MemberTeamRow>, u64)> {
        (**self).fetch_window_with_total(filter, page).await
    }

    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }
}
