use std::time::Instant;

use tracing::debug;

use super::{PaginationStrategy, SearchExecutor};
use crate::config::SearchConfig;
use crate::constants::pagination::MAX_PAGE_SIZE;
use crate::error::{Result, SearchError};
use crate::logging::{log_error, log_search_operation};
use crate::models::{MemberSearchCondition, MemberTeamRow};
use crate::query_builder::{Condition, FilterPredicate, Page, PageRequest};

/// Tunables the facade applies on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacadeSettings {
    pub strategy: PaginationStrategy,
    pub max_page_size: u64,
    pub reject_inverted_age_range: bool,
}

impl Default for FacadeSettings {
    fn default() -> Self {
        Self {
            strategy: PaginationStrategy::default(),
            max_page_size: MAX_PAGE_SIZE,
            reject_inverted_age_range: false,
        }
    }
}

impl FacadeSettings {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            strategy: config.pagination.strategy,
            max_page_size: config.pagination.max_page_size,
            reject_inverted_age_range: config.criteria.reject_inverted_age_range,
        }
    }
}

/// Turns optional criteria into a filter and runs it through an executor.
///
/// The facade never retries and holds no state between calls; each call
/// builds a fresh predicate from its criteria.
#[derive(Debug)]
pub struct SearchQueryFacade<E: SearchExecutor> {
    executor: E,
    settings: FacadeSettings,
}

impl<E: SearchExecutor> SearchQueryFacade<E> {
    pub fn new(executor: E) -> Self {
        Self::with_settings(executor, FacadeSettings::default())
    }

    pub fn with_settings(executor: E, settings: FacadeSettings) -> Self {
        Self { executor, settings }
    }

    pub fn from_config(executor: E, config: &SearchConfig) -> Self {
        Self::with_settings(executor, FacadeSettings::from_config(config))
    }

    pub fn with_strategy(mut self, strategy: PaginationStrategy) -> Self {
        self.settings.strategy = strategy;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn settings(&self) -> &FacadeSettings {
        &self.settings
    }

    /// Compose the conjunction of every present criterion.
    ///
    /// Clauses appear in the order username, team name, lower age bound,
    /// upper age bound. Blank text counts as absent. No criteria yields the
    /// match-all predicate.
    pub fn build_filter(criteria: &MemberSearchCondition) -> FilterPredicate {
        let username = criteria
            .username_text()
            .map(|v| Condition::UsernameEq(v.to_string()));
        let team_name = criteria
            .team_name_text()
            .map(|v| Condition::TeamNameEq(v.to_string()));
        let age_goe = criteria.age_goe.map(Condition::AgeGoe);
        let age_loe = criteria.age_loe.map(Condition::AgeLoe);

        [username, team_name, age_goe, age_loe]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Every matching row, unpaginated
    pub async fn search(&self, criteria: &MemberSearchCondition) -> Result<Vec<MemberTeamRow>> {
        let filter = self.prepare(criteria)?;
        let started = Instant::now();

        let rows = self
            .executor
            .fetch_rows(&filter, None)
            .await
            .map_err(|e| self.report("search", e))?;

        log_search_operation(
            "search",
            self.executor.backend_name(),
            filter.len(),
            rows.len(),
            None,
            elapsed_ms(started),
        );
        Ok(rows)
    }

    /// One window of matching rows plus the total, using the configured strategy
    pub async fn search_page(
        &self,
        criteria: &MemberSearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberTeamRow>> {
        match self.settings.strategy {
            PaginationStrategy::Combined => self.search_page_combined(criteria, page).await,
            PaginationStrategy::Split => self.search_page_split(criteria, page).await,
        }
    }

    /// Window and total from a single execution
    pub async fn search_page_combined(
        &self,
        criteria: &MemberSearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberTeamRow>> {
        let filter = self.prepare(criteria)?;
        self.check_page(page)?;
        let started = Instant::now();

        let (items, total_count) = self
            .executor
            .fetch_window_with_total(&filter, page)
            .await
            .map_err(|e| self.report("search_page_combined", e))?;

        log_search_operation(
            "search_page_combined",
            self.executor.backend_name(),
            filter.len(),
            items.len(),
            Some(total_count),
            elapsed_ms(started),
        );
        Ok(Page::new(items, total_count, page))
    }

    /// Content query first; the count query only runs when the window cannot
    /// determine the total on its own.
    pub async fn search_page_split(
        &self,
        criteria: &MemberSearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberTeamRow>> {
        let filter = self.prepare(criteria)?;
        self.check_page(page)?;
        let started = Instant::now();

        let items = self
            .executor
            .fetch_rows(&filter, Some(page))
            .await
            .map_err(|e| self.report("search_page_split", e))?;

        let total_count = match total_from_window(page, items.len() as u64) {
            Some(total) => {
                debug!(total, "Count query skipped, total determined by window");
                total
            }
            None => {
                let counted = self
                    .executor
                    .count(&filter)
                    .await
                    .map_err(|e| self.report("search_page_split", e))?;
                at_least_window(page, items.len() as u64, counted)
            }
        };

        log_search_operation(
            "search_page_split",
            self.executor.backend_name(),
            filter.len(),
            items.len(),
            Some(total_count),
            elapsed_ms(started),
        );
        Ok(Page::new(items, total_count, page))
    }

    fn prepare(&self, criteria: &MemberSearchCondition) -> Result<FilterPredicate> {
        if self.settings.reject_inverted_age_range && criteria.has_inverted_age_range() {
            return Err(SearchError::InvalidCriteria {
                reason: format!(
                    "age_goe ({:?}) is greater than age_loe ({:?})",
                    criteria.age_goe, criteria.age_loe
                ),
            });
        }
        Ok(Self::build_filter(criteria))
    }

    fn check_page(&self, page: PageRequest) -> Result<()> {
        if page.limit() > self.settings.max_page_size {
            return Err(SearchError::InvalidPageRequest {
                reason: format!(
                    "limit {} exceeds maximum page size {}",
                    page.limit(),
                    self.settings.max_page_size
                ),
            });
        }
        Ok(())
    }

    fn report(&self, operation: &str, error: SearchError) -> SearchError {
        log_error("search", operation, &error.to_string());
        error
    }
}

/// Total implied by a short window, if any.
///
/// A first page with room to spare holds everything. A non-empty later page
/// with room to spare ends the result set.
fn total_from_window(page: PageRequest, fetched: u64) -> Option<u64> {
    if fetched < page.limit() {
        if page.offset() == 0 {
            return Some(fetched);
        }
        if fetched > 0 {
            return Some(page.offset().saturating_add(fetched));
        }
    }
    None
}

/// Rows deleted between the content and count queries can leave the count
/// short of the window; a non-empty window proves `offset + fetched` rows.
fn at_least_window(page: PageRequest, fetched: u64, counted: u64) -> u64 {
    if fetched == 0 {
        return counted;
    }
    counted.max(page.offset().saturating_add(fetched))
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
