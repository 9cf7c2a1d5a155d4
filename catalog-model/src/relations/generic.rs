use super::RelationshipBuilder;
use serde_json::{Map, Value};

/// Builder for relationship kinds without a dedicated type, e.g. ones added
/// to the remote type system after this crate was generated.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericRelationship {
    relationship_type: String,
    attributes: Map<String, Value>,
}

impl GenericRelationship {
    pub fn new(relationship_type: impl Into<String>) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Merges `attributes` into the bundle, overwriting existing keys.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Map<String, Value>) -> Self {
        self.attributes.extend(attributes);
        self
    }
}

impl RelationshipBuilder for GenericRelationship {
    fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    fn attributes(&self) -> Map<String, Value> {
        self.attributes.clone()
    }
}
