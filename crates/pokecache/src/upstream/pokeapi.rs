//! HTTP client for the PokeAPI catalog.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use pokecache_core::catalog::{CatalogError, EntityId, Result};
use pokecache_core::upstream::{ItemPayload, ItemRef, PageResponse, UpstreamClient};

use crate::config::Config;

/// [`UpstreamClient`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Create a client from service configuration.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Self::new(&config.pokeapi_url, config.upstream_timeout())
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a successful response body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::malformed(e.to_string()))
    }

    /// Turn a non-success status into an error.
    async fn status_error(response: reqwest::Response) -> CatalogError {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        CatalogError::unavailable(format!("upstream returned {}: {}", status, message))
    }
}

/// Classify a reqwest transport error.
fn transport_error(err: reqwest::Error) -> CatalogError {
    CatalogError::UpstreamUnavailable {
        reason: err.to_string(),
        timed_out: err.is_timeout(),
    }
}

#[async_trait]
impl UpstreamClient for PokeApiClient {
    async fn fetch_page_refs(&self, offset: u64, limit: u32) -> Result<Vec<ItemRef>> {
        tracing::debug!(offset, limit, "Fetching page references from upstream");

        let response = self
            .client
            .get(self.url("/pokemon"))
            .query(&[("limit", u64::from(limit)), ("offset", offset)])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let page: PageResponse = Self::decode(response).await?;
        Ok(page.results)
    }

    async fn fetch_item(&self, id: EntityId) -> Result<ItemPayload> {
        tracing::debug!(id, "Fetching item from upstream");

        let response = self
            .client
            .get(self.url(&format!("/pokemon/{}", id)))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { id });
        }
        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }

        Self::decode(response).await
    }
}
