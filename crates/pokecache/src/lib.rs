//! pokecache - Caching aggregation layer in front of the PokeAPI catalog.
//!
//! The [`CatalogService`] owns an entity store and a page store, resolves
//! misses through an [`UpstreamClient`](pokecache_core::upstream::UpstreamClient),
//! and keeps locally created or edited entities alongside upstream ones.

pub mod config;
pub mod service;
pub mod store;
pub mod upstream;

pub use config::Config;
pub use service::CatalogService;
pub use store::{MemoryEntityStore, MemoryPageStore};
pub use upstream::PokeApiClient;
