//! Upstream client implementations.
//!
//! `PokeApiClient` talks to the real catalog over HTTP. `MockUpstream`
//! (feature `mock`, always available in tests) serves an in-memory catalog.

#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod pokeapi;

#[cfg(any(test, feature = "mock"))]
pub use mock::{sample_item, MockUpstream};
pub use pokeapi::PokeApiClient;
