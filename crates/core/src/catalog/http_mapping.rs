//! Pure functions for mapping catalog errors to HTTP status codes.
//!
//! The HTTP layer lives outside this workspace; these mappings are what it
//! is expected to apply.

use super::{CatalogError, PageRequestError};

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `DuplicateName` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `UpstreamUnavailable` -> 504 (Gateway Timeout) when timed out, else 502 (Bad Gateway)
/// - `MalformedUpstreamData` -> 502 (Bad Gateway)
///
/// # Examples
///
/// ```
/// use pokecache_core::catalog::{catalog_error_to_status_code, CatalogError};
///
/// let error = CatalogError::NotFound { id: 25 };
/// assert_eq!(catalog_error_to_status_code(&error), 404);
/// ```
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::DuplicateName { .. } => 400,
        CatalogError::NotFound { .. } => 404,
        CatalogError::UpstreamUnavailable {
            timed_out: true, ..
        } => 504,
        CatalogError::UpstreamUnavailable { .. } => 502,
        CatalogError::MalformedUpstreamData(_) => 502,
    }
}

/// Maps a [`PageRequestError`] to an HTTP status code. Always 400.
pub fn page_request_error_to_status_code(_error: &PageRequestError) -> u16 {
    400
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_maps_to_400() {
        let error = CatalogError::DuplicateName {
            name: "pikachu".to_string(),
        };
        assert_eq!(catalog_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            catalog_error_to_status_code(&CatalogError::NotFound { id: 1 }),
            404
        );
    }

    #[test]
    fn test_upstream_unavailable_maps_to_502() {
        let error = CatalogError::unavailable("connection reset");
        assert_eq!(catalog_error_to_status_code(&error), 502);
    }

    #[test]
    fn test_upstream_timeout_maps_to_504() {
        let error = CatalogError::UpstreamUnavailable {
            reason: "operation timed out".to_string(),
            timed_out: true,
        };
        assert_eq!(catalog_error_to_status_code(&error), 504);
    }

    #[test]
    fn test_malformed_maps_to_502() {
        let error = CatalogError::malformed("types is empty");
        assert_eq!(catalog_error_to_status_code(&error), 502);
    }

    #[test]
    fn test_page_request_error_maps_to_400() {
        assert_eq!(
            page_request_error_to_status_code(&PageRequestError::InvalidLimit(0)),
            400
        );
    }
}
