use crate::entity::entity;
use crate::reference::RelatedRef;
use catalog_types::CertificateStatus;

entity! {
    /// Root of the entity hierarchy.
    pub struct Referenceable("Referenceable") {
        attributes {
            qualified_name: String = "qualifiedName",
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
        }
    }
}

entity! {
    /// Base type of every catalog asset.
    pub struct Asset("Asset") extends "Referenceable" {
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
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
            links: Vec<RelatedRef> = "links",
            readme: RelatedRef = "readme",
            user_def_relationship_to: Vec<RelatedRef> = "userDefRelationshipTo",
            user_def_relationship_from: Vec<RelatedRef> = "userDefRelationshipFrom",
        }
    }
}
