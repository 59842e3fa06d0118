//! Recording executor for asserting which queries the facade issues.
//!
//! Wraps an [`InMemorySearchExecutor`] and tracks every call in shared state,
//! optionally failing calls to exercise error propagation.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use member_search::error::{Result, SearchError};
use member_search::models::MemberTeamRow;
use member_search::query_builder::{FilterPredicate, PageRequest};
use member_search::search::{InMemorySearchExecutor, SearchExecutor};

#[derive(Debug, Default, Clone)]
pub struct RecordingState {
    pub fetch_calls: Vec<(FilterPredicate, Option<PageRequest>)>,
    pub count_calls: Vec<FilterPredicate>,
    pub combined_calls: Vec<(FilterPredicate, PageRequest)>,
    pub fail_fetch: bool,
    pub fail_count: bool,
    /// Count reported instead of the real one, as after a concurrent delete
    pub stale_count: Option<u64>,
}

pub struct RecordingExecutor {
    inner: InMemorySearchExecutor,
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingExecutor {
    pub fn new(inner: InMemorySearchExecutor) -> Self {
        Self {
            inner,
            state: Arc::new(Mutex::new(RecordingState::default())),
        }
    }

    pub fn failing_fetch(self) -> Self {
        self.state.lock().unwrap().fail_fetch = true;
        self
    }

    pub fn failing_count(self) -> Self {
        self.state.lock().unwrap().fail_count = true;
        self
    }

    pub fn with_stale_count(self, count: u64) -> Self {
        self.state.lock().unwrap().stale_count = Some(count);
        self
    }

    /// Handle to the recorded calls that outlives the facade
    pub fn state(&self) -> Arc<Mutex<RecordingState>> {
        Arc::clone(&self.state)
    }
}

#[async_trait]
impl SearchExecutor for RecordingExecutor {
    async fn fetch_rows(
        &self,
        filter: &FilterPredicate,
        window: Option<PageRequest>,
    ) -> Result<Vec<MemberTeamRow>> {
        let fail = {
            let mut state = self.state.lock().unwrap();
            state.fetch_calls.push((filter.clone(), window));
            state.fail_fetch
        };
        if fail {
            return Err(SearchError::query_execution("fetch_rows", "connection reset"));
        }
        self.inner.fetch_rows(filter, window).await
    }

    async fn count(&self, filter: &FilterPredicate) -> Result<u64> {
        let (fail, stale) = {
            let mut state = self.state.lock().unwrap();
            state.count_calls.push(filter.clone());
            (state.fail_count, state.stale_count)
        };
        if fail {
            return Err(SearchError::query_execution("count", "statement timeout"));
        }
        match stale {
            Some(count) => Ok(count),
            None => self.inner.count(filter).await,
        }
    }

    async fn fetch_window_with_total(
        &self,
        filter: &FilterPredicate,
        page: PageRequest,
    ) -> Result<(Vec<MemberTeamRow>, u64)> {
        let fail = {
            let mut state = self.state.lock().unwrap();
            state.combined_calls.push((filter.clone(), page));
            state.fail_fetch
        };
        if fail {
            return Err(SearchError::query_execution(
                "fetch_window_with_total",
                "connection reset",
            ));
        }
        self.inner.fetch_window_with_total(filter, page).await
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}
