//! Page arithmetic for the surah list.

use std::ops::{Range, RangeInclusive};

/// Cards per page.
pub const PAGE_SIZE: usize = 5;
/// Page-number indicators shown at once.
pub const MAX_PAGE_INDICATORS: usize = 7;

/// Number of pages for `count` items; an empty list still has one page.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Index range of `page` (1-based) within a list of `count` items.
pub fn page_bounds(page: usize, count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(count);
    let end = (start + PAGE_SIZE).min(count);
    start..end
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub current: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(current: usize, count: usize) -> Self {
        Self {
            current,
            total_pages: total_pages(count),
        }
    }

    /// Indicator window centred on the current page, clamped to `1..=total`.
    pub fn window(&self) -> RangeInclusive<usize> {
        let span = MAX_PAGE_INDICATORS - 1;
        let mut start = self.current.saturating_sub(span / 2).max(1);
        let end = (start + span).min(self.total_pages);
        if end - start < span {
            start = end.saturating_sub(span).max(1);
        }
        start..=end
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(12), 3);
        assert_eq!(total_pages(114), 23);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        assert_eq!(page_bounds(3, 12), 10..12);
        assert_eq!(page_bounds(1, 12), 0..5);
        assert_eq!(page_bounds(1, 0), 0..0);
    }

    #[test]
    fn window_is_clamped_at_both_ends() {
        assert_eq!(Pagination::new(1, 114).window(), 1..=7);
        assert_eq!(Pagination::new(4, 114).window(), 1..=7);
        assert_eq!(Pagination::new(10, 114).window(), 7..=13);
        assert_eq!(Pagination::new(23, 114).window(), 17..=23);
        assert_eq!(Pagination::new(2, 12).window(), 1..=3);
        assert_eq!(Pagination::new(1, 0).window(), 1..=1);
    }

    #[test]
    fn prev_next_disabled_at_edges() {
        let first = Pagination::new(1, 12);
        assert!(!first.has_previous());
        assert!(first.has_next());
        let last = Pagination::new(3, 12);
        assert!(last.has_previous());
        assert!(!last.has_next());
        let only = Pagination::new(1, 3);
        assert!(!only.has_previous() && !only.has_next());
    }
}
