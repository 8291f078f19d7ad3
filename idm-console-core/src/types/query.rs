// ============ Pagination ============

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound accepted by [`ListQuery::validated`].
pub const MAX_PAGE_SIZE: u32 = 500;

/// Query parameters for entity listing, with optional search and status filtering.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 10`, with no keyword or status filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
    /// Optional keyword to match against the entity key or display fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Optional enabled/disabled filter for status entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Return the whole filtered list instead of one page.
    ///
    /// Used by tables that slice on the client side.
    #[serde(default)]
    pub fetch_all: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            keyword: None,
            enabled: None,
            fetch_all: false,
        }
    }
}

impl ListQuery {
    /// Query for one page.
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Query for the whole (filtered) list.
    pub fn all() -> Self {
        Self {
            fetch_all: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|k| !k.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: Option<bool>) -> Self {
        self.enabled = enabled;
        self
    }

    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    /// - `keyword`, `enabled` and `fetch_all` are preserved as-is
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
            keyword: self.keyword.clone(),
            enabled: self.enabled,
            fetch_all: self.fetch_all,
        }
    }
}

/// A paginated response wrapper.
///
/// Returned by all list operations. Contains the current page of items
/// (or the whole list when fetched with [`ListQuery::fetch_all`]) along with
/// pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, automatically computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = u64::from(page) * u64::from(page_size) < u64::from(total_count);
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_clamps_page_and_size() {
        let q = ListQuery::page(0, 10_000).validated(MAX_PAGE_SIZE);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, MAX_PAGE_SIZE);

        let q = ListQuery::page(3, 0).validated(MAX_PAGE_SIZE);
        assert_eq!(q.page, 3);
        assert_eq!(q.page_size, 1);
    }

    #[test]
    fn blank_keyword_is_dropped() {
        let q = ListQuery::default().with_keyword(Some("   ".into()));
        assert_eq!(q.keyword, None);
    }

    #[test]
    fn has_more_is_computed() {
        let r = PaginatedResponse::new(vec![1, 2, 3], 3, 10, 23);
        assert!(!r.has_more);
        let r = PaginatedResponse::new(vec![0; 10], 2, 10, 23);
        assert!(r.has_more);
    }
}
