//! Offset pagination arithmetic for list endpoints.

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A clamped page request.
///
/// `page` is at least 1 and `page_size` lies in `1..=MAX_PAGE_SIZE`, so the
/// offset and limit derived from it are always safe to hand to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    page_size: i64,
}

impl PageRequest {
    /// Clamp raw caller input into a valid page request.
    ///
    /// Non-positive page sizes fall back to the default rather than the
    /// minimum; oversized ones are capped.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = page.max(DEFAULT_PAGE_NUMBER);
        let page_size = if page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };

        Self { page, page_size }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Rows to skip before this page starts.
    ///
    /// Saturates at `i64::MAX`, the largest offset SQL drivers accept.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size) as u64
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }

    /// Number of pages needed to hold `total` rows.
    pub fn total_pages(&self, total: u64) -> i64 {
        total.div_ceil(self.page_size as u64) as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}
