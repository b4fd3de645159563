//! pokecache_core - Functional core for the pokecache catalog service.
//!
//! Everything in this crate is free of I/O: domain types, the patch merge,
//! page keys, upstream payload projection, and the store/upstream traits
//! that the `pokecache` crate implements.

pub mod cache;
pub mod catalog;
pub mod upstream;
