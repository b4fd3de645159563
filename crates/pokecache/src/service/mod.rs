//! Catalog cache service.
//!
//! Composes the entity store, the page store and the upstream client:
//!
//! - **Single reads**: check the entity store, on miss fetch from upstream,
//!   project and store
//! - **Page reads**: check the page store, on miss list references upstream,
//!   resolve every item concurrently through the entity store, store the
//!   ordered page
//! - **Writes**: create, update and delete touch only the entity store; page
//!   results are never invalidated
//!
//! # Example
//!
//! ```ignore
//! use pokecache::{CatalogService, Config};
//! use pokecache_core::catalog::PageRequest;
//!
//! let service = CatalogService::from_config(&Config::from_env())?;
//! let page = service.list_entities(PageRequest::from_query(Some(2), None)?).await?;
//! ```

mod ids;
mod inflight;

use std::sync::Arc;

use futures_util::future::try_join_all;
use tokio::sync::Mutex;

use pokecache_core::cache::{EntityStore, PageStore};
use pokecache_core::catalog::{
    apply_patch, CatalogError, Entity, EntityId, EntityPatch, NewEntity, PageRequest, Result,
};
use pokecache_core::upstream::{project_item, ItemRef, UpstreamClient};

use crate::config::Config;
use crate::store::{MemoryEntityStore, MemoryPageStore};
use crate::upstream::PokeApiClient;

use self::ids::IdGenerator;
use self::inflight::InFlight;

/// Dual-cache catalog service.
///
/// Construct one per process and clone the handle into every caller;
/// clones share stores, upstream client and in-flight bookkeeping.
///
/// # Type Parameters
///
/// * `E` - The entity store implementation
/// * `P` - The page store implementation
/// * `U` - The upstream client implementation
pub struct CatalogService<E = MemoryEntityStore, P = MemoryPageStore, U = PokeApiClient>
where
    E: EntityStore,
    P: PageStore,
    U: UpstreamClient,
{
    entities: Arc<E>,
    pages: Arc<P>,
    upstream: Arc<U>,
    in_flight: Arc<InFlight>,
    ids: Arc<IdGenerator>,
    /// Serializes the name check and insert of `create_entity`.
    create_lock: Arc<Mutex<()>>,
}

impl<E, P, U> Clone for CatalogService<E, P, U>
where
    E: EntityStore,
    P: PageStore,
    U: UpstreamClient,
{
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
            pages: Arc::clone(&self.pages),
            upstream: Arc::clone(&self.upstream),
            in_flight: Arc::clone(&self.in_flight),
            ids: Arc::clone(&self.ids),
            create_lock: Arc::clone(&self.create_lock),
        }
    }
}

impl CatalogService {
    /// Creates a service with empty in-memory stores talking to PokeAPI.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let upstream = PokeApiClient::from_config(config)?;
        Ok(Self::with_upstream(Arc::new(upstream)))
    }
}

impl<U> CatalogService<MemoryEntityStore, MemoryPageStore, U>
where
    U: UpstreamClient,
{
    /// Creates a service with empty in-memory stores.
    pub fn with_upstream(upstream: Arc<U>) -> Self {
        Self::new(
            Arc::new(MemoryEntityStore::new()),
            Arc::new(MemoryPageStore::new()),
            upstream,
        )
    }
}

impl<E, P, U> CatalogService<E, P, U>
where
    E: EntityStore,
    P: PageStore,
    U: UpstreamClient,
{
    /// Creates a new catalog service.
    ///
    /// # Arguments
    ///
    /// * `entities` - Store of resolved entities
    /// * `pages` - Store of page results
    /// * `upstream` - Client for the remote catalog
    pub fn new(entities: Arc<E>, pages: Arc<P>, upstream: Arc<U>) -> Self {
        Self {
            entities,
            pages,
            upstream,
            in_flight: Arc::new(InFlight::default()),
            ids: Arc::new(IdGenerator::default()),
            create_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the entity store.
    pub fn entity_store(&self) -> &E {
        &self.entities
    }

    /// Returns the page store.
    pub fn page_store(&self) -> &P {
        &self.pages
    }

    /// Returns the upstream client.
    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Resolves one entity, from the entity store or else from upstream.
    ///
    /// Concurrent misses for the same id wait on each other, so only the
    /// first one reaches upstream.
    pub async fn resolve_one(&self, id: EntityId) -> Result<Entity> {
        if let Some(entity) = self.entities.get(id).await {
            tracing::trace!(id, "Cache hit for entity");
            return Ok(entity);
        }

        let _claim = self.in_flight.acquire(id).await;

        // Populated by another caller while we waited
        if let Some(entity) = self.entities.get(id).await {
            tracing::trace!(id, "Cache filled while waiting for entity");
            return Ok(entity);
        }

        tracing::trace!(id, "Cache miss for entity");
        let payload = self.upstream.fetch_item(id).await.map_err(|err| {
            tracing::warn!(id, error = %err, "Upstream item fetch failed");
            err
        })?;

        if payload.id != id {
            return Err(CatalogError::malformed(format!(
                "requested item {} but upstream returned {}",
                id, payload.id
            )));
        }

        let entity = project_item(payload)?;
        self.entities.set(entity.clone()).await;
        tracing::debug!(id, name = %entity.name, "Entity cached from upstream");

        Ok(entity)
    }

    /// Resolves one page, from the page store or else from upstream.
    ///
    /// Items are resolved concurrently and returned in upstream reference
    /// order. The first failure fails the page, cancels the remaining
    /// fetches, and leaves the page store untouched.
    pub async fn resolve_page(&self, request: PageRequest) -> Result<Vec<Entity>> {
        let key = request.key();

        if let Some(page) = self.pages.get(&key).await {
            tracing::trace!(%key, count = page.len(), "Cache hit for page");
            return Ok(page);
        }

        tracing::trace!(%key, offset = request.offset(), "Cache miss for page");
        let refs = self
            .upstream
            .fetch_page_refs(request.offset(), request.limit())
            .await
            .map_err(|err| {
                tracing::warn!(%key, error = %err, "Upstream page listing failed");
                err
            })?;

        let ids = refs
            .iter()
            .map(ItemRef::entity_id)
            .collect::<Result<Vec<_>>>()?;

        let entities = try_join_all(ids.into_iter().map(|id| self.resolve_one(id))).await?;

        self.pages.set(key.clone(), entities.clone()).await;
        tracing::debug!(%key, count = entities.len(), "Page cached");

        Ok(entities)
    }

    // ========================================================================
    // Boundary operations
    // ========================================================================

    /// Creates a local entity.
    ///
    /// Fails with `DuplicateName` if any stored entity has the same name.
    /// Missing vitality defaults to 0 and missing images to an empty list.
    pub async fn create_entity(&self, candidate: NewEntity) -> Result<Entity> {
        let _lock = self.create_lock.lock().await;

        if self.entities.find_by_name(&candidate.name).await.is_some() {
            tracing::debug!(name = %candidate.name, "Rejected duplicate name");
            return Err(CatalogError::DuplicateName {
                name: candidate.name,
            });
        }

        let mut id = self.ids.next();
        while self.entities.has(id).await {
            id = self.ids.next();
        }

        let entity = candidate.into_entity(id);
        self.entities.set(entity.clone()).await;
        tracing::debug!(id, name = %entity.name, "Entity created");

        Ok(entity)
    }

    /// Lists one page of entities.
    pub async fn list_entities(&self, request: PageRequest) -> Result<Vec<Entity>> {
        self.resolve_page(request).await
    }

    /// Gets one entity by id.
    pub async fn get_entity(&self, id: EntityId) -> Result<Entity> {
        self.resolve_one(id).await
    }

    /// Merges `patch` over the current entity and stores the result.
    ///
    /// The entity is resolved first, so updating an id never seen before
    /// fetches and caches it from upstream. An empty patch writes nothing.
    pub async fn update_entity(&self, id: EntityId, patch: EntityPatch) -> Result<Entity> {
        let current = self.resolve_one(id).await?;
        if patch.is_empty() {
            tracing::trace!(id, "Empty patch, entity unchanged");
            return Ok(current);
        }

        let updated = apply_patch(&current, &patch);
        self.entities.set(updated.clone()).await;
        tracing::debug!(id, "Entity updated");

        Ok(updated)
    }

    /// Deletes an entity from the entity store.
    ///
    /// Cached pages that contain the entity keep serving it.
    pub async fn delete_entity(&self, id: EntityId) -> Result<String> {
        let current = self.resolve_one(id).await?;

        self.entities.delete(current.id).await;
        tracing::debug!(id, name = %current.name, "Entity deleted");

        Ok(format!("pokemon {} with id {} removed", current.name, current.id))
    }
}
