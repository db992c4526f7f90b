//! Pagination utilities for the service layer.
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    pub const DEFAULT_PER_PAGE: u64 = 100;

    /// Clamp to sane values and convert to `(skip, limit)`.
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.max(1);
        let per_page = self.per_page.max(1);
        ((page - 1).saturating_mul(per_page), per_page)
    }

    /// Total page count for `total` rows: ceil(total / per_page).
    pub fn total_pages(total: u64, per_page: u64) -> u64 {
        if per_page == 0 {
            return 0;
        }
        total.div_ceil(per_page)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: Self::DEFAULT_PER_PAGE } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_page_and_per_page() {
        let (skip, limit) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(skip, 0);
        assert_eq!(limit, 1);
    }

    #[test]
    fn normalize_computes_skip_from_page() {
        let (skip, limit) = Pagination { page: 3, per_page: 25 }.normalize();
        assert_eq!(skip, 50);
        assert_eq!(limit, 25);
    }

    #[test]
    fn normalize_saturates_on_huge_page() {
        let (skip, limit) = Pagination { page: u64::MAX, per_page: 2 }.normalize();
        assert_eq!(skip, u64::MAX);
        assert_eq!(limit, 2);
    }

    #[test]
    fn default_matches_service_limit() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::total_pages(0, 100), 0);
        assert_eq!(Pagination::total_pages(1, 100), 1);
        assert_eq!(Pagination::total_pages(100, 100), 1);
        assert_eq!(Pagination::total_pages(101, 100), 2);
        assert_eq!(Pagination::total_pages(7, 2), 4);
    }
}
