use super::{RelationshipBuilder, put};
use crate::reference::RelatedRef;
use catalog_types::SemanticTag;
use serde_json::{Map, Value};

/// A user-defined, labelled relationship between any two assets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDefRelationship {
    description: Option<String>,
    to_type_label: Option<String>,
    from_type_label: Option<String>,
}

impl UserDefRelationship {
    pub const RELATIONSHIP_TYPE: &'static str = "UserDefRelationship";

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Label read from the "to" end, e.g. "consumed by".
    #[must_use]
    pub fn to_type_label(mut self, label: impl Into<String>) -> Self {
        self.to_type_label = Some(label.into());
        self
    }

    /// Label read from the "from" end, e.g. "feeds".
    #[must_use]
    pub fn from_type_label(mut self, label: impl Into<String>) -> Self {
        self.from_type_label = Some(label.into());
        self
    }

    /// Reference for an asset's `userDefRelationshipTo`.
    pub fn user_def_relationship_to(&self, related: RelatedRef, semantic: SemanticTag) -> RelatedRef {
        self.reference(related, semantic)
    }

    /// Reference for an asset's `userDefRelationshipFrom`.
    pub fn user_def_relationship_from(
        &self,
        related: RelatedRef,
        semantic: SemanticTag,
    ) -> RelatedRef {
        self.reference(related, semantic)
    }
}

impl RelationshipBuilder for UserDefRelationship {
    fn relationship_type(&self) -> &str {
        Self::RELATIONSHIP_TYPE
    }

    fn attributes(&self) -> Map<String, Value> {
        let mut bundle = Map::new();
        put(&mut bundle, "description", self.description.clone());
        put(&mut bundle, "toTypeLabel", self.to_type_label.clone());
        put(&mut bundle, "fromTypeLabel", self.from_type_label.clone());
        bundle
    }
}
