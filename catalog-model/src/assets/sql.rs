use crate::entity::entity;
use crate::reference::RelatedRef;
use catalog_types::{CertificateStatus, Field};

entity! {
    /// A relational table.
    pub struct Table("Table") extends "Asset" {
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
            column_count: i64 = "columnCount",
            row_count: i64 = "rowCount",
            size_bytes: i64 = "sizeBytes",
            is_partitioned: bool = "isPartitioned",
            database_name: String = "databaseName",
            database_qualified_name: String = "databaseQualifiedName",
            schema_name: String = "schemaName",
            schema_qualified_name: String = "schemaQualifiedName",
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
            links: Vec<RelatedRef> = "links",
            readme: RelatedRef = "readme",
            user_def_relationship_to: Vec<RelatedRef> = "userDefRelationshipTo",
            user_def_relationship_from: Vec<RelatedRef> = "userDefRelationshipFrom",
            columns: Vec<RelatedRef> = "columns",
            atlan_schema: RelatedRef = "atlanSchema",
        }
    }
}

entity! {
    /// A column of a table.
    pub struct Column("Column") extends "Asset" {
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
            data_type: String = "dataType",
            order: i64 = "order",
            is_nullable: bool = "isNullable",
            is_primary: bool = "isPrimary",
            max_length: i64 = "maxLength",
            table_name: String = "tableName",
            table_qualified_name: String = "tableQualifiedName",
        }
        relationships {
            meanings: Vec<RelatedRef> = "meanings",
            links: Vec<RelatedRef> = "links",
            readme: RelatedRef = "readme",
            user_def_relationship_to: Vec<RelatedRef> = "userDefRelationshipTo",
            user_def_relationship_from: Vec<RelatedRef> = "userDefRelationshipFrom",
            table: RelatedRef = "table",
        }
    }
}

impl Table {
    /// A new table inside the schema with the given qualified name.
    pub fn creator(name: impl Into<String>, schema_qualified_name: impl Into<String>) -> Self {
        let name = name.into();
        let schema_qualified_name = schema_qualified_name.into();
        Self {
            qualified_name: Field::Value(format!("{schema_qualified_name}/{name}")),
            name: Field::Value(name),
            atlan_schema: Field::Value(RelatedRef::by_qualified_name(
                "Schema",
                schema_qualified_name.clone(),
            )),
            schema_qualified_name: Field::Value(schema_qualified_name),
            ..Default::default()
        }
    }
}

impl Column {
    /// A new column at position `order` of the table with the given qualified name.
    pub fn creator(
        name: impl Into<String>,
        table_qualified_name: impl Into<String>,
        order: i64,
    ) -> Self {
        let name = name.into();
        let table_qualified_name = table_qualified_name.into();
        Self {
            qualified_name: Field::Value(format!("{table_qualified_name}/{name}")),
            name: Field::Value(name),
            order: Field::Value(order),
            table: Field::Value(RelatedRef::by_qualified_name(
                "Table",
                table_qualified_name.clone(),
            )),
            table_qualified_name: Field::Value(table_qualified_name),
            ..Default::default()
        }
    }
}
