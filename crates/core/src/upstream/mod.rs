mod projection;
mod traits;
mod types;

pub use projection::project_item;
pub use traits::UpstreamClient;
pub use types::{
    ItemPayload, ItemRef, NamedResource, PageResponse, SpritesPayload, StatPayload,
    TypeSlotPayload,
};
