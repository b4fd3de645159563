use thiserror::Error;

use super::EntityId;

/// Errors that can occur when constructing a page request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("Invalid page: {0}. Pages start at 1")]
    InvalidPage(u32),
    #[error("Invalid limit: {0}. Limit must be at least 1")]
    InvalidLimit(u32),
}

/// Errors surfaced by catalog operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A locally created entity collides with a stored name.
    #[error("{name} already exists")]
    DuplicateName { name: String },
    /// The entity is absent both locally and upstream.
    #[error("Pokemon with id {id} not found")]
    NotFound { id: EntityId },
    /// Transport or protocol failure talking to upstream.
    #[error("Upstream unavailable: {reason}")]
    UpstreamUnavailable { reason: String, timed_out: bool },
    /// Upstream answered with a payload missing expected data.
    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),
}

impl CatalogError {
    /// Shorthand for a non-timeout `UpstreamUnavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            reason: reason.into(),
            timed_out: false,
        }
    }

    /// Shorthand for `MalformedUpstreamData`.
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedUpstreamData(detail.into())
    }

    /// Returns true when retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
