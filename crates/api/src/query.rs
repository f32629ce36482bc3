//! Shared query parameter types for API handlers.

use flashcards_core::pagination::Pagination;
use serde::Deserialize;

/// Listing parameters (`?filter=&limit=&page=`).
///
/// `page` is 1-based. Normalization happens in [`Pagination::new`].
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub filter: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

impl ListParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.page)
    }

    /// The name filter, with blank values treated as absent.
    pub fn name_filter(&self) -> Option<String> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filter_is_ignored() {
        let params = ListParams {
            filter: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(params.name_filter(), None);
    }

    #[test]
    fn pagination_uses_defaults() {
        assert_eq!(ListParams::default().pagination(), Pagination::default());
    }
}
