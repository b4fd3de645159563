use async_trait::async_trait;

use crate::catalog::{EntityId, Result};

use super::{ItemPayload, ItemRef};

/// Client for the remote read-only catalog.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Lists the references of one page, in upstream order.
    ///
    /// Fails with `UpstreamUnavailable` on transport errors.
    async fn fetch_page_refs(&self, offset: u64, limit: u32) -> Result<Vec<ItemRef>>;

    /// Fetches one raw item payload.
    ///
    /// Fails with `NotFound` when upstream reports the item absent (HTTP 404)
    /// and `UpstreamUnavailable` on any other transport or protocol failure.
    async fn fetch_item(&self, id: EntityId) -> Result<ItemPayload>;
}
