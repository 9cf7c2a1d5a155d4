use catalog_types::{EntityStatus, SemanticTag};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which a non-default [`SemanticTag`] travels in the flat JSON form
/// of a reference. The conversion engine strips it before anything reaches
/// the wire.
pub const SEMANTIC_KEY: &str = "semantic";

/// Relationship-specific attribute bundle attached to a reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAttributes {
    /// Relationship type name, e.g. `AtlasGlossaryIsARelationship`.
    pub type_name: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// A pointer from one entity to another.
///
/// Identified by `guid` or by `unique_attributes` (usually a qualified name).
/// Builders in [`crate::relations`] fill in the relationship type and bundle;
/// plain references created with [`RelatedRef::by_guid`] and friends carry
/// neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_attributes: Option<RelationshipAttributes>,
    /// Server-populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    /// Server-populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_guid: Option<String>,
    /// Server-populated status of the relationship itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
    /// Server-populated status of the referenced entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_status: Option<EntityStatus>,
    #[serde(default, skip_serializing_if = "SemanticTag::is_replace")]
    pub semantic: SemanticTag,
}

impl RelatedRef {
    pub fn by_guid(type_name: impl Into<String>, guid: impl Into<String>) -> Self {
        Self {
            guid: Some(guid.into()),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    pub fn by_qualified_name(type_name: impl Into<String>, qualified_name: impl Into<String>) -> Self {
        let mut unique = Map::new();
        unique.insert("qualifiedName".into(), Value::String(qualified_name.into()));
        Self::by_unique_attributes(type_name, unique)
    }

    pub fn by_unique_attributes(type_name: impl Into<String>, unique: Map<String, Value>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            unique_attributes: Some(unique),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_semantic(mut self, semantic: SemanticTag) -> Self {
        self.semantic = semantic;
        self
    }

    /// Attaches a relationship type and attribute bundle.
    #[must_use]
    pub fn with_relationship(
        mut self,
        relationship_type: impl Into<String>,
        attributes: Map<String, Value>,
    ) -> Self {
        let relationship_type = relationship_type.into();
        self.relationship_attributes = Some(RelationshipAttributes {
            type_name: relationship_type.clone(),
            attributes,
        });
        self.relationship_type = Some(relationship_type);
        self
    }

    /// Shortcut into the relationship attribute bundle.
    pub fn relationship_attribute(&self, name: &str) -> Option<&Value> {
        self.relationship_attributes
            .as_ref()
            .and_then(|r| r.attributes.get(name))
    }
}
