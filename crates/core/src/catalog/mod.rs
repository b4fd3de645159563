mod error;
mod http_mapping;
mod merge;
mod pagination;
mod types;

pub use error::{CatalogError, PageRequestError, Result};
pub use http_mapping::{catalog_error_to_status_code, page_request_error_to_status_code};
pub use merge::apply_patch;
pub use pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use types::{Entity, EntityId, EntityPatch, NewEntity};
