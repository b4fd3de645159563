//! Strict projection of upstream payloads onto [`Entity`].
//!
//! The extraction is fixed and order-dependent. Missing data fails with
//! `MalformedUpstreamData`; nothing is ever defaulted.

use crate::catalog::{CatalogError, Entity, Result};

use super::ItemPayload;

/// Projects an upstream item payload onto an entity.
///
/// - `vitality` is the first stat's base value
/// - `images` is `[front, back]`, in that order
/// - `category` is the first declared type's name
pub fn project_item(payload: ItemPayload) -> Result<Entity> {
    let id = payload.id;

    let vitality = payload
        .stats
        .first()
        .map(|stat| stat.base_stat)
        .ok_or_else(|| CatalogError::malformed(format!("item {id} has no stats")))?;

    let category = payload
        .types
        .into_iter()
        .next()
        .map(|slot| slot.kind.name)
        .ok_or_else(|| CatalogError::malformed(format!("item {id} has no types")))?;

    let front = payload
        .sprites
        .front_default
        .ok_or_else(|| CatalogError::malformed(format!("item {id} has no front sprite")))?;
    let back = payload
        .sprites
        .back_default
        .ok_or_else(|| CatalogError::malformed(format!("item {id} has no back sprite")))?;

    Ok(Entity {
        id,
        name: payload.name,
        category,
        vitality,
        images: vec![front, back],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{NamedResource, SpritesPayload, StatPayload, TypeSlotPayload};

    fn bulbasaur_payload() -> ItemPayload {
        ItemPayload {
            id: 1,
            name: "bulbasaur".to_string(),
            stats: vec![
                StatPayload { base_stat: 45 },
                StatPayload { base_stat: 49 },
            ],
            sprites: SpritesPayload {
                front_default: Some("front/1.png".to_string()),
                back_default: Some("back/1.png".to_string()),
            },
            types: vec![
                TypeSlotPayload {
                    kind: NamedResource {
                        name: "grass".to_string(),
                    },
                },
                TypeSlotPayload {
                    kind: NamedResource {
                        name: "poison".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn test_projects_first_stat_and_type() {
        let entity = project_item(bulbasaur_payload()).unwrap();

        assert_eq!(
            entity,
            Entity::new(1, "bulbasaur", "grass")
                .with_vitality(45)
                .with_images(["front/1.png", "back/1.png"])
        );
    }

    #[test]
    fn test_empty_stats_is_malformed() {
        let payload = ItemPayload {
            stats: vec![],
            ..bulbasaur_payload()
        };

        let err = project_item(payload).unwrap_err();
        assert_eq!(err, CatalogError::malformed("item 1 has no stats"));
    }

    #[test]
    fn test_empty_types_is_malformed() {
        let payload = ItemPayload {
            types: vec![],
            ..bulbasaur_payload()
        };

        let err = project_item(payload).unwrap_err();
        assert_eq!(err, CatalogError::malformed("item 1 has no types"));
    }

    #[test]
    fn test_missing_sprites_is_malformed() {
        let payload = ItemPayload {
            sprites: SpritesPayload::default(),
            ..bulbasaur_payload()
        };

        assert!(matches!(
            project_item(payload),
            Err(CatalogError::MalformedUpstreamData(_))
        ));
    }

    #[test]
    fn test_missing_back_sprite_is_malformed() {
        let mut payload = bulbasaur_payload();
        payload.sprites.back_default = None;

        let err = project_item(payload).unwrap_err();
        assert_eq!(err, CatalogError::malformed("item 1 has no back sprite"));
    }
}
