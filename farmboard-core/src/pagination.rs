//! Pagination types
//!
//! Pages are 1-indexed. A page past the end is not an error, it just yields
//! no items.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CoreError, Result};

/// Default items per page
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: i64,
    /// Items per page (always > 0)
    pub per_page: i64,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page must be positive
    pub fn new(page: i64, per_page: i64) -> Result<Self> {
        if per_page <= 0 {
            return Err(CoreError::invalid_parameter(
                "per_page",
                "must be a positive integer",
            ));
        }

        Ok(Self {
            page: page.max(1),
            per_page,
        })
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// Number of pages needed to show `total_count` items, `ceil(total / per_page)`.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        let total_count = total_count.max(0);
        total_count.saturating_add(self.per_page - 1) / self.per_page
    }

    /// Wrap one page of items fetched with this window.
    pub fn paginate<T>(self, items: Vec<T>, total: i64) -> Paginated<T> {
        Paginated {
            items,
            total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages(total),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Paginated response wrapper
///
/// Serializes with `has_next` and `has_prev` alongside the stored fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
    /// Total number of pages (0 when there are no items)
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Convert the items, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

impl<T: Serialize> Serialize for Paginated<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Paginated", 7)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("page", &self.page)?;
        state.serialize_field("per_page", &self.per_page)?;
        state.serialize_field("total_pages", &self.total_pages)?;
        state.serialize_field("has_next", &self.has_next())?;
        state.serialize_field("has_prev", &self.has_prev())?;
        state.end()
    }
}

/// Raw query parameters for pagination.
///
/// Kept as strings so a malformed `page` falls back to the first page instead
/// of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PaginationParams {
    /// Requested page, defaulting to 1 when absent or not an integer.
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
    }

    /// Resolve both parameters, honouring a caller-supplied `per_page`.
    ///
    /// A missing or non-numeric `per_page` uses `default_per_page`; a numeric
    /// value of zero or less is rejected.
    pub fn resolve(&self, default_per_page: i64) -> Result<Pagination> {
        let per_page = self
            .per_page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(default_per_page);

        Pagination::new(self.page(), per_page)
    }

    /// Resolve the page only, with a fixed page size.
    pub fn resolve_fixed(&self, per_page: i64) -> Result<Pagination> {
        Pagination::new(self.page(), per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, per_page: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: page.map(str::to_owned),
            per_page: per_page.map(str::to_owned),
        }
    }

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, 10).unwrap();
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, 10).unwrap();
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(3, 25).unwrap();
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn clamps_page() {
        let p = Pagination::new(0, 10).unwrap();
        assert_eq!(p.page, 1);

        let p = Pagination::new(-4, 10).unwrap();
        assert_eq!(p.page, 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn rejects_non_positive_per_page() {
        assert!(matches!(
            Pagination::new(1, 0).unwrap_err(),
            CoreError::InvalidParameter { name: "per_page", .. }
        ));
        assert!(Pagination::new(1, -10).is_err());
    }

    #[test]
    fn total_pages() {
        let p = Pagination::new(1, 10).unwrap();
        assert_eq!(p.total_pages(95), 10);
        assert_eq!(p.total_pages(100), 10);
        assert_eq!(p.total_pages(101), 11);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(1), 1);
    }

    #[test]
    fn page_past_end_is_not_an_error() {
        let p = Pagination::new(50, 10).unwrap();
        let page: Paginated<u8> = p.paginate(vec![], 30);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn has_next_prev() {
        let p = Pagination::new(1, 10).unwrap();
        let page: Paginated<()> = p.paginate(vec![], 30);
        assert!(page.has_next());
        assert!(!page.has_prev());

        let p = Pagination::new(2, 10).unwrap();
        let page: Paginated<()> = p.paginate(vec![], 30);
        assert!(page.has_next());
        assert!(page.has_prev());

        let p = Pagination::new(3, 10).unwrap();
        let page: Paginated<()> = p.paginate(vec![], 30);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn params_default_when_absent_or_malformed() {
        let p = params(None, None).resolve(DEFAULT_PER_PAGE).unwrap();
        assert_eq!(p, Pagination::default());

        let p = params(Some("abc"), Some("xyz")).resolve(DEFAULT_PER_PAGE).unwrap();
        assert_eq!(p, Pagination::default());

        let p = params(Some("3"), Some("25")).resolve(DEFAULT_PER_PAGE).unwrap();
        assert_eq!(p.page, 3);
        assert_eq!(p.per_page, 25);
    }

    #[test]
    fn params_reject_zero_per_page() {
        assert!(params(Some("1"), Some("0")).resolve(DEFAULT_PER_PAGE).is_err());
        assert!(params(None, Some("-1")).resolve(DEFAULT_PER_PAGE).is_err());
    }

    #[test]
    fn fixed_page_size_ignores_per_page() {
        let p = params(Some("2"), Some("0")).resolve_fixed(10).unwrap();
        assert_eq!(p.per_page, 10);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn serializes_navigation_flags() {
        let page = Pagination::new(2, 10).unwrap().paginate(vec!["a"], 30);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["has_next"], true);
        assert_eq!(json["has_prev"], true);
        assert_eq!(json["total_pages"], 3);
        assert_eq!(json["items"][0], "a");
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Pagination::new(2, 2).unwrap().paginate(vec![1, 2], 5);
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.total_pages, 3);
        assert_eq!(mapped.page, 2);
    }
}
