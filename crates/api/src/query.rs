//! Shared query parameter types for API handlers.

use serde::Deserialize;

use gallery_core::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Query parameters for the public and admin listing endpoints
/// (`?category=&tag=&q=&sort=&page=&page_size=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Category slug filter.
    pub category: Option<String>,
    /// Tag slug filter.
    pub tag: Option<String>,
    /// Free-text search query.
    pub q: Option<String>,
    /// Sort mode (`latest`, `popular`, `trending`, `today`, `week`, `month`).
    pub sort: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size, clamped to [`MAX_PAGE_SIZE`].
    pub page_size: Option<usize>,
}

impl ListParams {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        let params = ListParams {
            page_size: Some(10_000),
            ..Default::default()
        };
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);

        let params = ListParams {
            page_size: Some(0),
            ..Default::default()
        };
        assert_eq!(params.page_size(), 1);
    }

    #[test]
    fn defaults_apply_when_absent() {
        let params = ListParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);
    }
}
