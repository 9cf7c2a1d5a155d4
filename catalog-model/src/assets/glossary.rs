use crate::entity::{Entity, entity};
use crate::reference::RelatedRef;
use catalog_types::{CertificateStatus, Field};
use serde_json::{Map, Value};

entity! {
    /// A glossary: the anchor of a set of terms and categories.
    pub struct AtlasGlossary("AtlasGlossary") extends "Asset" {
        attributes {
            qualified_name: String = "qualifiedName",
            name: String = "name",
            display_name: String = "displayName",
            description: String = "description",
            user_description: String = "userDescription",
            certificate_status: CertificateStatus = "certificateStatus",
            certificate_status_message: String = "certificateStatusMessage",
            owner_users: Vec<String> = "ownerUsers",
            owner_groups: Vec<String> = "ownerGroups",
            announcement_title: String = "announcementTitle",
            announcement_message: String = "announcementMessage",
            connector_name: String = "connectorName",
            connection_qualified_name: String = "connectionQualifiedName",
            #[serde(serialize_with = "::catalog_types::serialize_finite")]
            popularity_score: f64 = "popularityScore",
            short_description: String = "shortDescription",
            long_description: String = "longDescription",
            language: String = "language",
            usage: String = "usage",
            additional_attributes: Map<String, Value> = "additionalAttributes",
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
            links: Vec<RelatedRef> = "links",
            readme: RelatedRef = "readme",
            user_def_relationship_to: Vec<RelatedRef> = "userDefRelationshipTo",
            user_def_relationship_from: Vec<RelatedRef> = "userDefRelationshipFrom",
            terms: Vec<RelatedRef> = "terms",
            categories: Vec<RelatedRef> = "categories",
        }
    }
}

entity! {
    /// A business term defined inside a glossary.
    pub struct AtlasGlossaryTerm("AtlasGlossaryTerm") extends "Asset" {
        attributes {
            qualified_name: String = "qualifiedName",
            name: String = "name",
            display_name: String = "displayName",
            description: String = "description",
            user_description: String = "userDescription",
            certificate_status: CertificateStatus = "certificateStatus",
            certificate_status_message: String = "certificateStatusMessage",
            owner_users: Vec<String> = "ownerUsers",
            owner_groups: Vec<String> = "ownerGroups",
            announcement_title: String = "announcementTitle",
            announcement_message: String = "announcementMessage",
            connector_name: String = "connectorName",
            connection_qualified_name: String = "connectionQualifiedName",
            #[serde(serialize_with = "::catalog_types::serialize_finite")]
            popularity_score: f64 = "popularityScore",
            short_description: String = "shortDescription",
            long_description: String = "longDescription",
            examples: Vec<String> = "examples",
            abbreviation: String = "abbreviation",
            usage: String = "usage",
            additional_attributes: Map<String, Value> = "additionalAttributes",
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
            links: Vec<RelatedRef> = "links",
            readme: RelatedRef = "readme",
            user_def_relationship_to: Vec<RelatedRef> = "userDefRelationshipTo",
            user_def_relationship_from: Vec<RelatedRef> = "userDefRelationshipFrom",
            anchor: RelatedRef = "anchor",
            categories: Vec<RelatedRef> = "categories",
            assigned_entities: Vec<RelatedRef> = "assignedEntities",
            classifies: Vec<RelatedRef> = "classifies",
            is_a: Vec<RelatedRef> = "isA",
            synonyms: Vec<RelatedRef> = "synonyms",
            antonyms: Vec<RelatedRef> = "antonyms",
            see_also: Vec<RelatedRef> = "seeAlso",
            replaced_by: Vec<RelatedRef> = "replacedBy",
            replacement_terms: Vec<RelatedRef> = "replacementTerms",
            translated_terms: Vec<RelatedRef> = "translatedTerms",
            translation_terms: Vec<RelatedRef> = "translationTerms",
            valid_values: Vec<RelatedRef> = "validValues",
            valid_values_for: Vec<RelatedRef> = "validValuesFor",
            preferred_terms: Vec<RelatedRef> = "preferredTerms",
            preferred_to_terms: Vec<RelatedRef> = "preferredToTerms",
        }
    }
}

entity! {
    /// A category grouping terms of one glossary.
    pub struct AtlasGlossaryCategory("AtlasGlossaryCategory") extends "Asset" {
        attributes {
            qualified_name: String = "qualifiedName",
            name: String = "name",
            display_name: String = "displayName",
            description: String = "description",
            user_description: String = "userDescription",
            certificate_status: CertificateStatus = "certificateStatus",
            certificate_status_message: String = "certificateStatusMessage",
            owner_users: Vec<String> = "ownerUsers",
            owner_groups: Vec<String> = "ownerGroups",
            announcement_title: String = "announcementTitle",
            announcement_message: String = "announcementMessage",
            connector_name: String = "connectorName",
            connection_qualified_name: String = "connectionQualifiedName",
            #[serde(serialize_with = "::catalog_types::serialize_finite")]
            popularity_score: f64 = "popularityScore",
            short_description: String = "shortDescription",
            long_description: String = "longDescription",
            additional_attributes: Map<String, Value> = "additionalAttributes",
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
            links: Vec<RelatedRef> = "links",
            readme: RelatedRef = "readme",
            user_def_relationship_to: Vec<RelatedRef> = "userDefRelationshipTo",
            user_def_relationship_from: Vec<RelatedRef> = "userDefRelationshipFrom",
            anchor: RelatedRef = "anchor",
            parent_category: RelatedRef = "parentCategory",
            children_categories: Vec<RelatedRef> = "childrenCategories",
            terms: Vec<RelatedRef> = "terms",
        }
    }
}

impl AtlasGlossary {
    /// A new glossary ready to be created.
    pub fn creator(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualified_name: Field::Value(name.clone()),
            name: Field::Value(name),
            ..Default::default()
        }
    }

    pub fn to_ref(&self) -> Option<RelatedRef> {
        reference_of::<Self>(self.guid(), self.qualified_name.value())
    }
}

impl AtlasGlossaryTerm {
    /// A new term anchored in `glossary`.
    ///
    /// The qualified name is a placeholder; the server assigns the real one.
    pub fn creator(name: impl Into<String>, glossary: RelatedRef) -> Self {
        let name = name.into();
        Self {
            qualified_name: Field::Value(name.clone()),
            name: Field::Value(name),
            anchor: Field::Value(glossary),
            ..Default::default()
        }
    }

    /// A reference to this term, by guid when known, else by qualified name.
    pub fn to_ref(&self) -> Option<RelatedRef> {
        reference_of::<Self>(self.guid(), self.qualified_name.value())
    }
}

impl AtlasGlossaryCategory {
    /// A new category anchored in `glossary`, optionally nested under `parent`.
    pub fn creator(
        name: impl Into<String>,
        glossary: RelatedRef,
        parent: Option<RelatedRef>,
    ) -> Self {
        let name = name.into();
        Self {
            qualified_name: Field::Value(name.clone()),
            name: Field::Value(name),
            anchor: Field::Value(glossary),
            parent_category: parent.map_or(Field::Absent, Field::Value),
            ..Default::default()
        }
    }

    pub fn to_ref(&self) -> Option<RelatedRef> {
        reference_of::<Self>(self.guid(), self.qualified_name.value())
    }
}

fn reference_of<E: Entity>(guid: Option<&str>, qualified_name: Option<&String>) -> Option<RelatedRef> {
    match (guid, qualified_name) {
        (Some(guid), _) => Some(E::ref_by_guid(guid)),
        (None, Some(qn)) => Some(E::ref_by_qualified_name(qn.as_str())),
        (None, None) => None,
    }
}
