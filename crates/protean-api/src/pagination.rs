//! Pagination metadata for list responses.

use serde::{Deserialize, Serialize};

/// Maximum number of items per page.
pub const MAX_PER_PAGE: u64 = 1000;

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total count of items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageMeta {
    /// Creates pagination metadata, computing the derived fields.
    ///
    /// `page` is clamped to at least 1 and `per_page` to `1..=MAX_PER_PAGE`.
    pub fn new(total: u64, page: u64, per_page: u64) -> Self {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);
        let page = page.max(1);
        let total_pages = total.div_ceil(per_page);
        Self {
            total,
            page,
            per_page,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Returns the zero-based offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_derived_fields() {
        let meta = PageMeta::new(45, 2, 10);
        assert_eq!(meta.total_pages, 5);
        assert!(meta.has_previous);
        assert!(meta.has_next);
        assert_eq!(meta.offset(), 10);
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let meta = PageMeta::new(45, 1, 10);
        assert!(!meta.has_previous);
        assert!(meta.has_next);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let meta = PageMeta::new(45, 5, 10);
        assert!(meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_empty_result_set() {
        let meta = PageMeta::new(0, 1, 10);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_previous);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_per_page_is_clamped() {
        let meta = PageMeta::new(10, 0, 0);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.per_page, 1);
        assert_eq!(meta.total_pages, 10);
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(PageMeta::new(12, 1, 10)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "total": 12, "page": 1, "per_page": 10,
                "total_pages": 2, "has_previous": false, "has_next": true
            })
        );
    }
}
