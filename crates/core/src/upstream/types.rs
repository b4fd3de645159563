//! Wire shapes of the upstream catalog (PokeAPI v2).
//!
//! Only the fields the projection reads are modelled; everything else in
//! the upstream payloads is ignored during deserialization.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::{CatalogError, EntityId, Result};

/// Body of `GET /pokemon?limit=L&offset=O`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<ItemRef>,
}

/// Opaque reference to one upstream item, as listed in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

impl ItemRef {
    /// Creates a reference from its URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            name: None,
            url: url.into(),
        }
    }

    /// Extracts the entity id from the last non-empty path segment.
    ///
    /// Upstream URLs end with a slash (`.../pokemon/25/`), so the id is the
    /// second-to-last raw segment; URLs without the trailing slash work too.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokecache_core::upstream::ItemRef;
    ///
    /// let item = ItemRef::new("https://pokeapi.co/api/v2/pokemon/25/");
    /// assert_eq!(item.entity_id().unwrap(), 25);
    /// ```
    pub fn entity_id(&self) -> Result<EntityId> {
        let url = Url::parse(&self.url).map_err(|e| {
            CatalogError::malformed(format!("invalid item reference {:?}: {}", self.url, e))
        })?;

        let segment = url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .ok_or_else(|| {
                CatalogError::malformed(format!("item reference {:?} has no path", self.url))
            })?;

        segment.parse().map_err(|_| {
            CatalogError::malformed(format!(
                "item reference {:?} does not end with an id",
                self.url
            ))
        })
    }
}

/// Body of `GET /pokemon/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub stats: Vec<StatPayload>,
    pub sprites: SpritesPayload,
    #[serde(default)]
    pub types: Vec<TypeSlotPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPayload {
    pub base_stat: u32,
}

/// Sprite URLs. Upstream sends `null` for missing images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpritesPayload {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlotPayload {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_with_trailing_slash() {
        let item = ItemRef::new("https://pokeapi.co/api/v2/pokemon/1/");
        assert_eq!(item.entity_id().unwrap(), 1);
    }

    #[test]
    fn test_entity_id_without_trailing_slash() {
        let item = ItemRef::new("https://pokeapi.co/api/v2/pokemon/151");
        assert_eq!(item.entity_id().unwrap(), 151);
    }

    #[test]
    fn test_entity_id_rejects_non_numeric_segment() {
        let item = ItemRef::new("https://pokeapi.co/api/v2/pokemon/pikachu/");
        assert!(matches!(
            item.entity_id(),
            Err(CatalogError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn test_entity_id_rejects_invalid_url() {
        let item = ItemRef::new("not a url");
        assert!(matches!(
            item.entity_id(),
            Err(CatalogError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn test_page_response_ignores_extra_fields() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=10",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }"#;

        let page: PageResponse = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, Some(1302));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name.as_deref(), Some("bulbasaur"));
    }

    #[test]
    fn test_item_payload_accepts_null_sprites() {
        let json = r#"{
            "id": 10001,
            "name": "deoxys-attack",
            "stats": [{"base_stat": 50, "effort": 0}],
            "sprites": {"front_default": "front.png", "back_default": null},
            "types": [{"slot": 1, "type": {"name": "psychic", "url": "x"}}]
        }"#;

        let payload: ItemPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.sprites.back_default, None);
        assert_eq!(payload.types[0].kind.name, "psychic");
    }
}
