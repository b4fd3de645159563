//! Store implementations.
//!
//! Concrete implementations of the `EntityStore` and `PageStore` traits
//! defined in `pokecache_core::cache`. Only the in-memory backend exists;
//! the catalog is rebuilt from upstream on every start.

mod memory;

pub use memory::{MemoryEntityStore, MemoryPageStore};
