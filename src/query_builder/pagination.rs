use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Offset/limit window over a result set. Offset is applied before limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageRequestParams")]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

/// Unvalidated wire form of [`PageRequest`]
#[derive(Deserialize)]
struct PageRequestParams {
    #[serde(default)]
    offset: u64,
    limit: u64,
}

impl TryFrom<PageRequestParams> for PageRequest {
    type Error = SearchError;

    fn try_from(params: PageRequestParams) -> Result<Self> {
        Self::new(params.offset, params.limit)
    }
}

impl PageRequest {
    /// Create a window from a raw offset and a positive limit
    pub fn new(offset: u64, limit: u64) -> Result<Self> {
        if limit == 0 {
            return Err(SearchError::InvalidPageRequest {
                reason: "limit must be positive".to_string(),
            });
        }
        Ok(Self { offset, limit })
    }

    /// Create pagination with page number (1-indexed) and per-page count
    pub fn page(page: u64, per_page: u64) -> Result<Self> {
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        Self::new(offset, per_page)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        format!(" LIMIT {} OFFSET {}", self.limit, self.offset)
    }

    /// Get current page number (1-indexed)
    pub fn current_page(&self) -> u64 {
        (self.offset / self.limit).saturating_add(1)
    }

    /// Calculate total pages given a total count
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.limit)
    }

    /// Check if there's a next page
    pub fn has_next_page(&self, total_count: u64) -> bool {
        self.offset.saturating_add(self.limit) < total_count
    }

    /// Check if there's a previous page
    pub fn has_previous_page(&self) -> bool {
        self.offset > 0
    }
}

/// One window of a result set plus the size of the whole set.
///
/// `total_count` counts every matching row regardless of the window, so
/// `total_count >= items.len()` always holds; [`Page::new`] raises a short
/// total to the window length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        let total_count = total_count.max(items.len() as u64);
        Self {
            items,
            total_count,
            request,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        self.request.total_pages(self.total_count)
    }

    pub fn current_page(&self) -> u64 {
        self.request.current_page()
    }

    pub fn has_next_page(&self) -> bool {
        self.request.has_next_page(self.total_count)
    }

    pub fn has_previous_page(&self) -> bool {
        self.request.has_previous_page()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            request: self.request,
        }
    }
}
