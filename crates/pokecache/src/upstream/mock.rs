//! In-memory upstream for tests and offline demos.
//!
//! Serves a fixed catalog of item payloads, counts every call, and can
//! inject per-item latency or failures.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use pokecache_core::catalog::{CatalogError, EntityId, Result};
use pokecache_core::upstream::{
    ItemPayload, ItemRef, NamedResource, SpritesPayload, StatPayload, TypeSlotPayload,
    UpstreamClient,
};

const SPRITES_BASE: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Builds a well-formed upstream payload.
pub fn sample_item(id: EntityId, name: &str, category: &str, vitality: u32) -> ItemPayload {
    ItemPayload {
        id,
        name: name.to_string(),
        stats: vec![StatPayload {
            base_stat: vitality,
        }],
        sprites: SpritesPayload {
            front_default: Some(format!("{}/{}.png", SPRITES_BASE, id)),
            back_default: Some(format!("{}/back/{}.png", SPRITES_BASE, id)),
        },
        types: vec![TypeSlotPayload {
            kind: NamedResource {
                name: category.to_string(),
            },
        }],
    }
}

#[derive(Debug, Default)]
struct MockState {
    items: BTreeMap<EntityId, ItemPayload>,
    latency: HashMap<EntityId, Duration>,
    item_failures: HashMap<EntityId, CatalogError>,
    page_failure: Option<CatalogError>,
    completed: Vec<EntityId>,
}

/// Mock [`UpstreamClient`] listing its items in ascending id order.
#[derive(Debug, Default)]
pub struct MockUpstream {
    state: Mutex<MockState>,
    item_calls: AtomicUsize,
    page_calls: AtomicUsize,
}

impl MockUpstream {
    /// Creates an empty upstream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an upstream with items `1..=count`.
    ///
    /// Item 1 is bulbasaur (grass, 45 hp); the rest get generated names.
    pub fn with_items(count: EntityId) -> Self {
        let upstream = Self::new();
        for id in 1..=count {
            let item = match id {
                1 => sample_item(1, "bulbasaur", "grass", 45),
                _ => sample_item(id, &format!("pokemon-{}", id), "normal", 40 + id as u32),
            };
            upstream.insert(item);
        }
        upstream
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Adds or replaces an item.
    pub fn insert(&self, item: ItemPayload) {
        self.state().items.insert(item.id, item);
    }

    /// Serves `item` under `id`, whatever id the payload itself carries.
    pub fn insert_as(&self, id: EntityId, item: ItemPayload) {
        self.state().items.insert(id, item);
    }

    /// Delays every fetch of `id` by `latency`.
    pub fn set_latency(&self, id: EntityId, latency: Duration) {
        self.state().latency.insert(id, latency);
    }

    /// Makes every fetch of `id` fail with `error`.
    pub fn fail_item(&self, id: EntityId, error: CatalogError) {
        self.state().item_failures.insert(id, error);
    }

    /// Makes every page listing fail with `error`.
    pub fn fail_pages(&self, error: CatalogError) {
        self.state().page_failure = Some(error);
    }

    /// Number of `fetch_item` calls so far.
    pub fn item_calls(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_page_refs` calls so far.
    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    /// Total upstream calls so far.
    pub fn total_calls(&self) -> usize {
        self.item_calls() + self.page_calls()
    }

    /// Ids of successful item fetches, in completion order.
    pub fn completion_order(&self) -> Vec<EntityId> {
        self.state().completed.clone()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    async fn fetch_page_refs(&self, offset: u64, limit: u32) -> Result<Vec<ItemRef>> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);

        let state = self.state();
        if let Some(err) = &state.page_failure {
            return Err(err.clone());
        }

        Ok(state
            .items
            .keys()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|id| ItemRef::new(format!("https://pokeapi.co/api/v2/pokemon/{}/", id)))
            .collect())
    }

    async fn fetch_item(&self, id: EntityId) -> Result<ItemPayload> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);

        let latency = self.state().latency.get(&id).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.state();
        if let Some(err) = state.item_failures.get(&id) {
            return Err(err.clone());
        }
        let item = state
            .items
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })?;
        state.completed.push(id);
        Ok(item)
    }
}
