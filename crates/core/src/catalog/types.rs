use serde::{Deserialize, Serialize};

/// Primary key of a catalog entity.
///
/// Upstream ids are small positive integers; locally created entities get
/// millisecond timestamps, so the type has to hold both.
pub type EntityId = u64;

/// A single catalog record.
///
/// Field names follow the domain; the serialized names match the public
/// wire shape (`type`, `hp`, `sprites`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "hp")]
    pub vitality: u32,
    #[serde(rename = "sprites")]
    pub images: Vec<String>,
}

impl Entity {
    /// Creates an entity with no vitality and no images.
    pub fn new(id: EntityId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            vitality: 0,
            images: Vec::new(),
        }
    }

    /// Sets the vitality stat.
    pub fn with_vitality(mut self, vitality: u32) -> Self {
        self.vitality = vitality;
        self
    }

    /// Sets the image URLs.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}

/// Candidate for a locally created entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "hp", default, skip_serializing_if = "Option::is_none")]
    pub vitality: Option<u32>,
    #[serde(rename = "sprites", default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl NewEntity {
    /// Creates a candidate with only the required fields.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            vitality: None,
            images: None,
        }
    }

    /// Turns the candidate into a stored entity under `id`, applying defaults.
    pub fn into_entity(self, id: EntityId) -> Entity {
        Entity {
            id,
            name: self.name,
            category: self.category,
            vitality: self.vitality.unwrap_or(0),
            images: self.images.unwrap_or_default(),
        }
    }
}

/// Partial update of an entity. Absent fields are retained.
///
/// There is deliberately no `id` field: ids never change on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "hp", default, skip_serializing_if = "Option::is_none")]
    pub vitality: Option<u32>,
    #[serde(rename = "sprites", default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl EntityPatch {
    /// Patch that only renames the entity.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.vitality.is_none()
            && self.images.is_none()
    }
}
