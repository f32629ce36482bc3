//! Page-based pagination.
//!
//! Listing endpoints take `?limit=&page=` where `page` is 1-based. Missing or
//! non-positive values fall back to the defaults below.

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Page size used when the caller supplies none.
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on any page size.
pub const MAX_LIMIT: i64 = 100;

/* --------------------------------------------------------------------------
Pagination
-------------------------------------------------------------------------- */

/// A normalized page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page size, within `1..=MAX_LIMIT`.
    pub limit: i64,
    /// 1-based page number.
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: 1,
        }
    }
}

impl Pagination {
    /// Normalize raw query values.
    pub fn new(limit: Option<i64>, page: Option<i64>) -> Self {
        let limit = match limit {
            Some(l) if l > 0 => l.min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };
        let page = match page {
            Some(p) if p > 0 => p,
            _ => 1,
        };
        Self { limit, page }
    }

    /// Number of records to skip before this page.
    pub fn skip(&self) -> i64 {
        self.limit.saturating_mul(self.page - 1)
    }

    /// The same page with half the page size (never below one).
    ///
    /// Used when two record kinds share a single page.
    pub fn halved(&self) -> Self {
        Self {
            limit: (self.limit / 2).max(1),
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let p = Pagination::new(None, None);
        assert_eq!(p.limit, DEFAULT_LIMIT);
        assert_eq!(p.page, 1);
        assert_eq!(p.skip(), 0);
    }

    #[test]
    fn non_positive_values_use_defaults() {
        let p = Pagination::new(Some(0), Some(-3));
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn skip_is_limit_times_previous_pages() {
        let p = Pagination::new(Some(20), Some(3));
        assert_eq!(p.skip(), 40);
    }

    #[test]
    fn limit_is_clamped() {
        let p = Pagination::new(Some(10_000), None);
        assert_eq!(p.limit, MAX_LIMIT);
    }

    #[test]
    fn halved_never_reaches_zero() {
        assert_eq!(Pagination::new(Some(10), Some(2)).halved().limit, 5);
        assert_eq!(Pagination::new(Some(1), None).halved().limit, 1);
        assert_eq!(Pagination::new(Some(10), Some(2)).halved().page, 2);
    }
}
