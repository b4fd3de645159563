//! Patch merge for catalog entities.
//!
//! Pure function, no side effects: the caller decides where the merged
//! entity is stored.

use super::types::{Entity, EntityPatch};

/// Merges the present fields of `patch` over `current`.
///
/// Fields absent from the patch are retained and the id is never touched.
///
/// # Examples
///
/// ```
/// use pokecache_core::catalog::{apply_patch, Entity, EntityPatch};
///
/// let current = Entity::new(1, "bulbasaur", "grass").with_vitality(45);
/// let merged = apply_patch(&current, &EntityPatch::rename("newName"));
///
/// assert_eq!(merged.id, 1);
/// assert_eq!(merged.name, "newName");
/// assert_eq!(merged.category, "grass");
/// assert_eq!(merged.vitality, 45);
/// ```
pub fn apply_patch(current: &Entity, patch: &EntityPatch) -> Entity {
    Entity {
        id: current.id,
        name: patch.name.clone().unwrap_or_else(|| current.name.clone()),
        category: patch
            .category
            .clone()
            .unwrap_or_else(|| current.category.clone()),
        vitality: patch.vitality.unwrap_or(current.vitality),
        images: patch
            .images
            .clone()
            .unwrap_or_else(|| current.images.clone()),
    }
}
