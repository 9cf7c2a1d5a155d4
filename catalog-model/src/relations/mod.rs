//! Relationship attribute builders.
//!
//! A builder holds the metadata of one relationship kind and turns plain
//! references into tagged ones:
//!
//! ```
//! use catalog_model::relations::IsA;
//! use catalog_model::{AtlasGlossaryTerm, Entity};
//! use catalog_types::SemanticTag;
//!
//! let person = AtlasGlossaryTerm::ref_by_guid("b4113341-251b-4adc-81fb-2420501c30e6");
//! let reference = IsA::new()
//!     .description("is-a Person")
//!     .classifies(person, SemanticTag::Replace);
//! assert_eq!(reference.relationship_type.as_deref(), Some("AtlasGlossaryIsARelationship"));
//! ```
//!
//! Only metadata that was set ends up in the attribute bundle.

mod generic;
mod glossary;
mod user_defined;

pub use generic::GenericRelationship;
pub use glossary::{
    Antonym, IsA, PreferredTerm, RelatedTerm, ReplacementTerm, SemanticAssignment, Synonym,
    TermCategorization, Translation, ValidValue,
};
pub use user_defined::UserDefRelationship;

use crate::reference::RelatedRef;
use catalog_types::SemanticTag;
use serde_json::{Map, Value};

/// Common behavior of every relationship attribute builder.
pub trait RelationshipBuilder {
    /// Wire name of the relationship type.
    fn relationship_type(&self) -> &str;

    /// The attribute bundle built from the metadata set so far.
    fn attributes(&self) -> Map<String, Value>;

    /// Tags `related` with this relationship and the given write semantic.
    fn reference(&self, related: RelatedRef, semantic: SemanticTag) -> RelatedRef {
        related
            .with_relationship(self.relationship_type(), self.attributes())
            .with_semantic(semantic)
    }
}

fn put(bundle: &mut Map<String, Value>, key: &str, value: Option<impl Into<Value>>) {
    if let Some(value) = value {
        bundle.insert(key.to_string(), value.into());
    }
}
