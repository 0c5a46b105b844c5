//! Page arithmetic for the expense table.

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Current position in a paged list. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` rows; an empty list still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Move to `page`, clamped into `1..=page_count(total)`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.page_count(total));
    }

    /// Pull the position back onto the last page if the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.page_count(total)
    }

    /// Rows on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_size_is_ten() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 10);
    }

    #[test]
    fn test_page_count() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(2), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
        assert_eq!(pagination.page_count(25), 3);
    }

    #[test]
    fn test_slice_pages() {
        let items: Vec<u32> = (1..=25).collect();
        let mut pagination = Pagination::default();
        assert_eq!(pagination.slice(&items), &items[0..10]);

        pagination.go_to(3, items.len());
        assert_eq!(pagination.slice(&items), &[21, 22, 23, 24, 25]);
        assert!(pagination.has_previous());
        assert!(!pagination.has_next(items.len()));
    }

    #[test]
    fn test_go_to_is_clamped() {
        let mut pagination = Pagination::default();
        pagination.go_to(9, 25);
        assert_eq!(pagination.page(), 3);
        pagination.go_to(0, 25);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut pagination = Pagination::default();
        pagination.go_to(3, 25);
        pagination.clamp(12);
        assert_eq!(pagination.page(), 2);
        pagination.clamp(0);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn test_small_filtered_list_fits_one_page() {
        let transport = vec!["bus", "train"];
        let pagination = Pagination::default();
        assert_eq!(pagination.page_count(transport.len()), 1);
        assert_eq!(pagination.slice(&transport), &["bus", "train"]);
    }
}
