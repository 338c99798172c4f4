//! API response types
//!
//! The paged-response envelope used by every list endpoint that supports
//! pagination.

use serde::{Deserialize, Serialize};

/// Paginated response envelope
///
/// Every paginated list endpoint returns this shape:
/// ```json
/// {
///     "items": [ ... ],
///     "total_count": 42,
///     "page_number": 2,
///     "page_size": 20,
///     "total_pages": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total_count: u64,
    /// Current page number (1-based)
    pub page_number: u32,
    /// Items per page
    pub page_size: u32,
    /// Total number of pages
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Create a page, computing `total_pages` from the count and page size
    pub fn new(items: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            ((total_count as f64) / (page_size as f64)).ceil() as u32
        };
        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
        }
    }

    /// Create an empty page
    pub fn empty(page_size: u32) -> Self {
        Self::new(Vec::new(), 0, 1, page_size)
    }

    /// Map items while preserving pagination metadata
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(&mut f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
