use async_trait::async_trait;

use crate::catalog::{Entity, EntityId};

use super::PageKey;

/// Keyed store of resolved entities, one entry per id.
///
/// Implementations never evict; entries leave only through [`delete`].
///
/// [`delete`]: EntityStore::delete
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Gets an entity by id.
    async fn get(&self, id: EntityId) -> Option<Entity>;

    /// Stores an entity under its own id, overwriting any previous value.
    async fn set(&self, entity: Entity);

    /// Removes an entity. Removing an absent id is a no-op.
    async fn delete(&self, id: EntityId);

    /// Returns true if an entity is stored under `id`.
    async fn has(&self, id: EntityId) -> bool;

    /// Finds a stored entity whose name matches exactly (case-sensitive).
    async fn find_by_name(&self, name: &str) -> Option<Entity>;

    /// Number of stored entities.
    async fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Keyed store of page results, one entry per [`PageKey`].
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Gets the ordered entities stored for a page.
    async fn get(&self, key: &PageKey) -> Option<Vec<Entity>>;

    /// Stores a page result, overwriting any previous value.
    async fn set(&self, key: PageKey, entities: Vec<Entity>);

    /// Removes a page result. Removing an absent key is a no-op.
    async fn delete(&self, key: &PageKey);

    /// Returns true if a page result is stored under `key`.
    async fn has(&self, key: &PageKey) -> bool;

    /// Number of stored pages.
    async fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
