use catalog_types::SemanticTag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entity in the nested wire layout.
///
/// Core header fields other than `typeName` are kept in `core` and written at
/// the top level. A relationship bucket that received nothing is `None` and
/// is left off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedEntity {
    pub type_name: String,
    #[serde(flatten)]
    pub core: Map<String, Value>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub append_relationship_attributes: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_relationship_attributes: Option<Map<String, Value>>,
}

impl NestedEntity {
    /// The bucket a tag routes to.
    pub fn bucket(&self, semantic: SemanticTag) -> Option<&Map<String, Value>> {
        match semantic {
            SemanticTag::Replace => self.relationship_attributes.as_ref(),
            SemanticTag::Append => self.append_relationship_attributes.as_ref(),
            SemanticTag::Remove => self.remove_relationship_attributes.as_ref(),
        }
    }

    pub fn set_buckets(&mut self, buckets: RelationshipBuckets) {
        self.relationship_attributes = buckets.replace;
        self.append_relationship_attributes = buckets.append;
        self.remove_relationship_attributes = buckets.remove;
    }
}

/// Relationship fields split by semantic tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipBuckets {
    pub replace: Option<Map<String, Value>>,
    pub append: Option<Map<String, Value>>,
    pub remove: Option<Map<String, Value>>,
}

impl RelationshipBuckets {
    pub fn get(&self, semantic: SemanticTag) -> Option<&Map<String, Value>> {
        match semantic {
            SemanticTag::Replace => self.replace.as_ref(),
            SemanticTag::Append => self.append.as_ref(),
            SemanticTag::Remove => self.remove.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.replace.is_none() && self.append.is_none() && self.remove.is_none()
    }

    pub(crate) fn insert(&mut self, semantic: SemanticTag, field: &str, value: Value) {
        let bucket = match semantic {
            SemanticTag::Replace => &mut self.replace,
            SemanticTag::Append => &mut self.append,
            SemanticTag::Remove => &mut self.remove,
        };
        bucket
            .get_or_insert_with(Map::new)
            .insert(field.to_string(), value);
    }
}
