use super::{RelationshipBuilder, put};
use crate::reference::RelatedRef;
use catalog_types::{SemanticTag, TermAssignmentStatus, TermRelationshipStatus};
use serde_json::{Map, Value};

/// Term-to-term relationship kinds all share the same metadata set.
macro_rules! term_relationship {
    (
        $(#[$meta:meta])*
        $name:ident => $type_name:literal {
            $( $(#[$end_meta:meta])* $end:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            description: Option<String>,
            expression: Option<String>,
            status: Option<TermRelationshipStatus>,
            steward: Option<String>,
            source: Option<String>,
        }

        impl $name {
            pub const RELATIONSHIP_TYPE: &'static str = $type_name;

            pub fn new() -> Self {
                Self::default()
            }

            #[must_use]
            pub fn description(mut self, description: impl Into<String>) -> Self {
                self.description = Some(description.into());
                self
            }

            #[must_use]
            pub fn expression(mut self, expression: impl Into<String>) -> Self {
                self.expression = Some(expression.into());
                self
            }

            #[must_use]
            pub fn status(mut self, status: TermRelationshipStatus) -> Self {
                self.status = Some(status);
                self
            }

            #[must_use]
            pub fn steward(mut self, steward: impl Into<String>) -> Self {
                self.steward = Some(steward.into());
                self
            }

            #[must_use]
            pub fn source(mut self, source: impl Into<String>) -> Self {
                self.source = Some(source.into());
                self
            }

            $(
                $(#[$end_meta])*
                pub fn $end(&self, related: RelatedRef, semantic: SemanticTag) -> RelatedRef {
                    self.reference(related, semantic)
                }
            )+
        }

        impl RelationshipBuilder for $name {
            fn relationship_type(&self) -> &str {
                Self::RELATIONSHIP_TYPE
            }

            fn attributes(&self) -> Map<String, Value> {
                let mut bundle = Map::new();
                put(&mut bundle, "description", self.description.clone());
                put(&mut bundle, "expression", self.expression.clone());
                put(&mut bundle, "status", self.status.map(|s| s.as_str()));
                put(&mut bundle, "steward", self.steward.clone());
                put(&mut bundle, "source", self.source.clone());
                bundle
            }
        }
    };
}

term_relationship! {
    /// Hierarchical "is-a" between a specific and a generic term.
    IsA => "AtlasGlossaryIsARelationship" {
        /// The related term is a more specific kind of the owning term.
        classifies,
        /// The related term is a more generic kind of the owning term.
        is_a,
    }
}

term_relationship! {
    /// Terms with the same meaning.
    Synonym => "AtlasGlossarySynonym" {
        synonyms,
    }
}

term_relationship! {
    /// Terms with opposite meanings.
    Antonym => "AtlasGlossaryAntonym" {
        antonyms,
    }
}

term_relationship! {
    /// Loosely related terms ("see also").
    RelatedTerm => "AtlasGlossaryRelatedTerm" {
        see_also,
    }
}

term_relationship! {
    ReplacementTerm => "AtlasGlossaryReplacementTerm" {
        replaced_by,
        replacement_terms,
    }
}

term_relationship! {
    Translation => "AtlasGlossaryTranslation" {
        translated_terms,
        translation_terms,
    }
}

term_relationship! {
    ValidValue => "AtlasGlossaryValidValue" {
        valid_values,
        valid_values_for,
    }
}

term_relationship! {
    PreferredTerm => "AtlasGlossaryPreferredTerm" {
        preferred_terms,
        preferred_to_terms,
    }
}

/// Membership of a term in a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermCategorization {
    description: Option<String>,
    status: Option<TermRelationshipStatus>,
}

impl TermCategorization {
    pub const RELATIONSHIP_TYPE: &'static str = "AtlasGlossaryTermCategorization";

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: TermRelationshipStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Reference to a term, for a category's `terms`.
    pub fn terms(&self, term: RelatedRef, semantic: SemanticTag) -> RelatedRef {
        self.reference(term, semantic)
    }

    /// Reference to a category, for a term's `categories`.
    pub fn categories(&self, category: RelatedRef, semantic: SemanticTag) -> RelatedRef {
        self.reference(category, semantic)
    }
}

impl RelationshipBuilder for TermCategorization {
    fn relationship_type(&self) -> &str {
        Self::RELATIONSHIP_TYPE
    }

    fn attributes(&self) -> Map<String, Value> {
        let mut bundle = Map::new();
        put(&mut bundle, "description", self.description.clone());
        put(&mut bundle, "status", self.status.map(|s| s.as_str()));
        bundle
    }
}

/// Assignment of a term to an asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SemanticAssignment {
    description: Option<String>,
    expression: Option<String>,
    status: Option<TermAssignmentStatus>,
    confidence: Option<i32>,
    created_by: Option<String>,
    steward: Option<String>,
    source: Option<String>,
}

impl SemanticAssignment {
    pub const RELATIONSHIP_TYPE: &'static str = "AtlasGlossarySemanticAssignment";

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: TermAssignmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Confidence of the assignment, 0-100.
    #[must_use]
    pub fn confidence(mut self, confidence: i32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    #[must_use]
    pub fn steward(mut self, steward: impl Into<String>) -> Self {
        self.steward = Some(steward.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Reference to an asset, for a term's `assignedEntities`.
    pub fn assigned_entities(&self, asset: RelatedRef, semantic: SemanticTag) -> RelatedRef {
        self.reference(asset, semantic)
    }

    /// Reference to a term, for an asset's `meanings`.
    pub fn meanings(&self, term: RelatedRef, semantic: SemanticTag) -> RelatedRef {
        self.reference(term, semantic)
    }
}

impl RelationshipBuilder for SemanticAssignment {
    fn relationship_type(&self) -> &str {
        Self::RELATIONSHIP_TYPE
    }

    fn attributes(&self) -> Map<String, Value> {
        let mut bundle = Map::new();
        put(&mut bundle, "description", self.description.clone());
        put(&mut bundle, "expression", self.expression.clone());
        put(&mut bundle, "status", self.status.map(|s| s.as_str()));
        put(&mut bundle, "confidence", self.confidence);
        put(&mut bundle, "createdBy", self.created_by.clone());
        put(&mut bundle, "steward", self.steward.clone());
        put(&mut bundle, "source", self.source.clone());
        bundle
    }
}
