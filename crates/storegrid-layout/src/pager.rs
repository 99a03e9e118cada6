#![forbid(unsafe_code)]

//! Page-window math for paginated listings.
//!
//! The grid engine always receives an already-paginated item slice;
//! [`PageWindow`] is the piece that decides which slice that is. Pages are
//! 1-based and out-of-range requests clamp rather than error, so a stale
//! page number after a filter change degrades to the nearest valid page.

/// Page math over a listing of known total size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    total_items: usize,
    per_page: usize,
}

impl PageWindow {
    /// Create a window over `total_items` items, `per_page` per page.
    #[must_use]
    pub const fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page,
        }
    }

    /// Total number of items.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Items per page.
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages (0 when there are no items or `per_page` is 0).
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        if self.per_page == 0 || self.total_items == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.per_page)
    }

    /// Clamp a requested 1-based page into range.
    ///
    /// Returns 0 only when there are no pages at all.
    #[must_use]
    pub const fn clamp_page(&self, page: usize) -> usize {
        let total = self.total_pages();
        if total == 0 {
            return 0;
        }
        if page == 0 {
            1
        } else if page > total {
            total
        } else {
            page
        }
    }

    /// Half-open item index range `[start, end)` for a 1-based page.
    ///
    /// The page is clamped first; an empty listing yields `(0, 0)`.
    #[must_use]
    pub const fn slice_bounds(&self, page: usize) -> (usize, usize) {
        let page = self.clamp_page(page);
        if page == 0 {
            return (0, 0);
        }
        let start = (page - 1) * self.per_page;
        let end = start + self.per_page;
        let end = if end > self.total_items {
            self.total_items
        } else {
            end
        };
        (start, end)
    }

    /// Number of items on a 1-based page (after clamping).
    #[must_use]
    pub const fn page_len(&self, page: usize) -> usize {
        let (start, end) = self.slice_bounds(page);
        end - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_has_no_pages() {
        let window = PageWindow::new(0, 24);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.clamp_page(3), 0);
        assert_eq!(window.slice_bounds(3), (0, 0));
    }

    #[test]
    fn zero_per_page_has_no_pages() {
        let window = PageWindow::new(100, 0);
        assert_eq!(window.total_pages(), 0);
        assert_eq!(window.slice_bounds(1), (0, 0));
    }

    #[test]
    fn exact_multiple_splits_evenly() {
        let window = PageWindow::new(48, 24);
        assert_eq!(window.total_pages(), 2);
        assert_eq!(window.slice_bounds(1), (0, 24));
        assert_eq!(window.slice_bounds(2), (24, 48));
        assert_eq!(window.page_len(2), 24);
    }

    #[test]
    fn last_page_is_partial() {
        let window = PageWindow::new(50, 24);
        assert_eq!(window.total_pages(), 3);
        assert_eq!(window.slice_bounds(3), (48, 50));
        assert_eq!(window.page_len(3), 2);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let window = PageWindow::new(50, 24);
        assert_eq!(window.clamp_page(0), 1);
        assert_eq!(window.clamp_page(99), 3);
        assert_eq!(window.slice_bounds(99), (48, 50));
    }

    #[test]
    fn single_short_page() {
        let window = PageWindow::new(5, 24);
        assert_eq!(window.total_pages(), 1);
        assert_eq!(window.slice_bounds(1), (0, 5));
    }

    #[test]
    fn bounds_cover_all_items_without_overlap() {
        let window = PageWindow::new(101, 24);
        let mut expected_start = 0;
        for page in 1..=window.total_pages() {
            let (start, end) = window.slice_bounds(page);
            assert_eq!(start, expected_start);
            assert!(end > start);
            expected_start = end;
        }
        assert_eq!(expected_start, 101);
    }
}
