//! Pagination Controller
//!
//! Tracks the current page over a list whose length changes. The item count
//! is pushed in by the owner after every mutation so the current page can
//! never point past the last page.

use std::ops::RangeInclusive;

/// Records shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page position over a list of `item_count` records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
    item_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

impl Pagination {
    /// A page size of zero is treated as one
    pub fn new(page_size: usize, item_count: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            item_count,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// `max(1, ceil(item_count / page_size))`
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size).max(1)
    }

    /// Record a new item count and clamp the current page down if needed
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let total = self.total_pages();
        if self.current_page > total {
            log::debug!("current page clamped from {} to {}", self.current_page, total);
            self.current_page = total;
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn go_to_last(&mut self) {
        self.current_page = self.total_pages();
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Page numbers for the page buttons
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Items on the current page: `[(page-1)*size, page*size)` intersected
    /// with the slice bounds
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current_page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(5, 0).total_pages(), 1);
        assert_eq!(Pagination::new(5, 5).total_pages(), 1);
        assert_eq!(Pagination::new(5, 6).total_pages(), 2);
        assert_eq!(Pagination::new(5, 10).total_pages(), 2);
        assert_eq!(Pagination::new(5, 11).total_pages(), 3);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut pages = Pagination::new(5, 12);
        pages.go_to(0);
        assert_eq!(pages.current_page(), 1);
        pages.go_to(9);
        assert_eq!(pages.current_page(), 3);
        pages.go_to(2);
        assert_eq!(pages.current_page(), 2);
    }

    #[test]
    fn test_next_previous_stop_at_edges() {
        let mut pages = Pagination::new(5, 7);
        assert!(!pages.has_previous());
        pages.previous();
        assert_eq!(pages.current_page(), 1);
        pages.next();
        assert_eq!(pages.current_page(), 2);
        assert!(!pages.has_next());
        pages.next();
        assert_eq!(pages.current_page(), 2);
    }

    #[test]
    fn test_shrink_clamps_current_page() {
        let mut pages = Pagination::new(5, 7);
        pages.go_to_last();
        assert_eq!(pages.current_page(), 2);
        pages.set_item_count(5);
        assert_eq!(pages.current_page(), 1);
        pages.set_item_count(0);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn test_grow_keeps_current_page() {
        let mut pages = Pagination::new(5, 3);
        pages.set_item_count(12);
        assert_eq!(pages.current_page(), 1);
    }

    #[test]
    fn test_page_slice() {
        let items: Vec<u32> = (1..=7).collect();
        let mut pages = Pagination::new(5, items.len());
        assert_eq!(pages.page_slice(&items), &[1, 2, 3, 4, 5]);
        pages.next();
        assert_eq!(pages.page_slice(&items), &[6, 7]);
        let empty: [u32; 0] = [];
        assert!(Pagination::new(5, 0).page_slice(&empty).is_empty());
    }

    #[test]
    fn test_pages_range() {
        assert_eq!(Pagination::new(5, 11).pages().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(Pagination::new(5, 0).pages().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_zero_page_size() {
        let pages = Pagination::new(0, 3);
        assert_eq!(pages.page_size(), 1);
        assert_eq!(pages.total_pages(), 3);
    }

    proptest! {
        #[test]
        fn current_page_stays_in_bounds(
            counts in proptest::collection::vec(0usize..40, 1..25),
            jumps in proptest::collection::vec(0usize..12, 1..25),
        ) {
            let mut pages = Pagination::new(DEFAULT_PAGE_SIZE, 0);
            for (count, jump) in counts.iter().zip(jumps.iter()) {
                pages.go_to(*jump);
                pages.set_item_count(*count);
                let expected_total = std::cmp::max(1, (count + 4) / 5);
                prop_assert_eq!(pages.total_pages(), expected_total);
                prop_assert!(pages.current_page() >= 1);
                prop_assert!(pages.current_page() <= pages.total_pages());
            }
        }
    }
}
