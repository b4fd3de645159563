//! In-memory entity and page stores.
//!
//! Both stores are `Arc<RwLock<HashMap<_, _>>>` so cloned handles share the
//! same data. Nothing is ever evicted: entries live until they are deleted
//! or the process exits.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pokecache_core::cache::{EntityStore, PageKey, PageStore};
use pokecache_core::catalog::{Entity, EntityId};

/// In-memory [`EntityStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityStore {
    entities: Arc<RwLock<HashMap<EntityId, Entity>>>,
}

impl MemoryEntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    async fn get(&self, id: EntityId) -> Option<Entity> {
        let entities = self.entities.read().await;
        entities.get(&id).cloned()
    }

    async fn set(&self, entity: Entity) {
        let mut entities = self.entities.write().await;
        entities.insert(entity.id, entity);
    }

    async fn delete(&self, id: EntityId) {
        let mut entities = self.entities.write().await;
        entities.remove(&id);
    }

    async fn has(&self, id: EntityId) -> bool {
        let entities = self.entities.read().await;
        entities.contains_key(&id)
    }

    async fn find_by_name(&self, name: &str) -> Option<Entity> {
        let entities = self.entities.read().await;
        entities.values().find(|e| e.name == name).cloned()
    }

    async fn len(&self) -> usize {
        self.entities.read().await.len()
    }
}

/// In-memory [`PageStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryPageStore {
    pages: Arc<RwLock<HashMap<PageKey, Vec<Entity>>>>,
}

impl MemoryPageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageStore for MemoryPageStore {
    async fn get(&self, key: &PageKey) -> Option<Vec<Entity>> {
        let pages = self.pages.read().await;
        pages.get(key).cloned()
    }

    async fn set(&self, key: PageKey, entities: Vec<Entity>) {
        let mut pages = self.pages.write().await;
        pages.insert(key, entities);
    }

    async fn delete(&self, key: &PageKey) {
        let mut pages = self.pages.write().await;
        pages.remove(key);
    }

    async fn has(&self, key: &PageKey) -> bool {
        let pages = self.pages.read().await;
        pages.contains_key(key)
    }

    async fn len(&self) -> usize {
        self.pages.read().await.len()
    }
}
