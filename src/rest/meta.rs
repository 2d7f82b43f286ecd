//! The `meta` object every entity and reference carries.

use serde::{Deserialize, Serialize};

/// Entity metadata: where the entity lives and what it is.
///
/// Entities reference each other by wrapping this in [`EntityRef`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    /// Absolute URL of the entity.
    pub href: String,
    /// URL of the entity type's metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_href: Option<String>,
    /// Entity type name (e.g. `product`).
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Media type of the entity representation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Link to the entity in the web UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid_href: Option<String>,
}

impl EntityMeta {
    /// Creates metadata pointing at `href` with the JSON media type.
    #[must_use]
    pub fn new(href: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            metadata_href: None,
            entity_type: entity_type.into(),
            media_type: Some("application/json".to_string()),
            uuid_href: None,
        }
    }
}

/// A reference to another entity, serialized as `{"meta": {...}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRef {
    /// Metadata of the referenced entity.
    pub meta: EntityMeta,
}

impl From<EntityMeta> for EntityRef {
    fn from(meta: EntityMeta) -> Self {
        Self { meta }
    }
}
