//! Listing constraints - category filter and pagination window.

/// A fixed-size window over the ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

impl PageWindow {
    /// Window for a zero-based page number at the given page size.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            limit: page_size,
            offset: page_size.saturating_mul(page),
        }
    }
}

/// Constraints for a post listing.
///
/// Results are always ordered by creation time, newest first. When both a
/// category filter and a window are present, the window applies to the
/// filtered result set, not the whole table.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub category: Option<String>,
    pub window: Option<PageWindow>,
}

impl PostQuery {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_page(mut self, page: u64, page_size: u64) -> Self {
        self.window = Some(PageWindow::new(page, page_size));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let window = PageWindow::new(0, 10);
        assert_eq!(window, PageWindow { limit: 10, offset: 0 });
    }

    #[test]
    fn offset_scales_with_page_number() {
        let window = PageWindow::new(3, 10);
        assert_eq!(window, PageWindow { limit: 10, offset: 30 });
    }

    #[test]
    fn oversized_page_number_saturates() {
        let window = PageWindow::new(u64::MAX, 10);
        assert_eq!(window.offset, u64::MAX);
    }

    #[test]
    fn default_query_has_no_constraints() {
        let query = PostQuery::default();
        assert!(query.category.is_none());
        assert!(query.window.is_none());
    }

    #[test]
    fn filter_and_window_compose() {
        let query = PostQuery::default().with_category("rant").with_page(2, 25);
        assert_eq!(query.category.as_deref(), Some("rant"));
        assert_eq!(query.window, Some(PageWindow { limit: 25, offset: 50 }));
    }
}
