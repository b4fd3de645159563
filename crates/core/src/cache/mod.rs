mod keys;
mod traits;

pub use keys::PageKey;
pub use traits::{EntityStore, PageStore};
