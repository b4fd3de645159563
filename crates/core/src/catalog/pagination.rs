use crate::cache::PageKey;

use super::PageRequestError;

/// Page used when the caller does not ask for one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A validated page request with 1-based `page` and a positive `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Creates a page request, rejecting zero page or limit.
    pub fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::InvalidPage(page));
        }
        if limit == 0 {
            return Err(PageRequestError::InvalidLimit(limit));
        }
        Ok(Self { page, limit })
    }

    /// Builds a request from optional query values, defaulting to page 1 of 10.
    pub fn from_query(page: Option<u32>, limit: Option<u32>) -> Result<Self, PageRequestError> {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Upstream offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Returns the page store key for this request.
    pub fn key(&self) -> PageKey {
        PageKey::new(self.page, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = PageRequest::from_query(None, None).unwrap();

        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_offset_is_rederived_from_page_and_limit() {
        assert_eq!(PageRequest::new(2, 10).unwrap().offset(), 10);
        assert_eq!(PageRequest::new(3, 25).unwrap().offset(), 50);
        assert_eq!(PageRequest::new(1, 5).unwrap().offset(), 0);
    }

    #[test]
    fn test_offset_does_not_overflow_u32() {
        let request = PageRequest::new(u32::MAX, u32::MAX).unwrap();
        assert_eq!(
            request.offset(),
            u64::from(u32::MAX - 1) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_zero_page_rejected() {
        assert_eq!(
            PageRequest::new(0, 10),
            Err(PageRequestError::InvalidPage(0))
        );
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(
            PageRequest::from_query(Some(2), Some(0)),
            Err(PageRequestError::InvalidLimit(0))
        );
    }

    #[test]
    fn test_key_matches_page_and_limit() {
        let request = PageRequest::new(2, 10).unwrap();
        assert_eq!(request.key().as_str(), "2-10");
    }
}
