use crate::reference::RelatedRef;
use crate::schema::EntityShape;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A generated flat entity type.
///
/// Implemented by the `entity!` generator; the conversion engine reaches the
/// type's fields only through its serde form and its [`EntityShape`].
pub trait Entity: Serialize + DeserializeOwned + Default + Clone + Debug + Send + Sync + 'static {
    /// Wire type name.
    const TYPE_NAME: &'static str;

    fn shape() -> &'static EntityShape;

    /// Guid of this instance, when one is set.
    fn guid(&self) -> Option<&str>;

    /// A plain reference to an entity of this type by guid.
    fn ref_by_guid(guid: impl Into<String>) -> RelatedRef {
        RelatedRef::by_guid(Self::TYPE_NAME, guid)
    }

    /// A plain reference to an entity of this type by qualified name.
    fn ref_by_qualified_name(qualified_name: impl Into<String>) -> RelatedRef {
        RelatedRef::by_qualified_name(Self::TYPE_NAME, qualified_name)
    }
}

/// Generates a flat entity struct, its `Default` (every field absent), its
/// static [`EntityShape`] and its [`Entity`] impl.
///
/// Attribute and relationship blocks list the complete inherited field set in
/// declaration order; the core header fields are added automatically.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($type_name:literal) $(extends $($supertype:literal),+)? {
            attributes {
                $( $(#[$attr_meta:meta])* $attr:ident: $attr_ty:ty = $attr_wire:literal, )*
            }
            relationships {
                $( $(#[$rel_meta:meta])* $rel:ident: $rel_ty:ty = $rel_wire:literal, )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            #[serde(rename = "typeName")]
            pub type_name: String,
            #[serde(skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub guid: ::catalog_types::Field<String>,
            #[serde(skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub status: ::catalog_types::Field<::catalog_types::EntityStatus>,
            #[serde(skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub version: ::catalog_types::Field<i64>,
            #[serde(rename = "createdBy", skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub created_by: ::catalog_types::Field<String>,
            #[serde(rename = "updatedBy", skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub updated_by: ::catalog_types::Field<String>,
            #[serde(rename = "createTime", skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub create_time: ::catalog_types::Field<i64>,
            #[serde(rename = "updateTime", skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub update_time: ::catalog_types::Field<i64>,
            #[serde(rename = "isIncomplete", skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub is_incomplete: ::catalog_types::Field<bool>,
            #[serde(skip_serializing_if = "::catalog_types::Field::is_absent")]
            pub labels: ::catalog_types::Field<Vec<String>>,
            $(
                $(#[$attr_meta])*
                #[serde(rename = $attr_wire, skip_serializing_if = "::catalog_types::Field::is_absent")]
                pub $attr: ::catalog_types::Field<$attr_ty>,
            )*
            $(
                $(#[$rel_meta])*
                #[serde(rename = $rel_wire, skip_serializing_if = "::catalog_types::Field::is_absent")]
                pub $rel: ::catalog_types::Field<$rel_ty>,
            )*
        }

        impl $name {
            pub const SHAPE: $crate::schema::EntityShape = $crate::schema::EntityShape {
                type_name: $type_name,
                supertypes: &[$($($supertype),+)?],
                attributes: &[$($attr_wire),*],
                relationships: &[$($rel_wire),*],
            };
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    type_name: $type_name.to_string(),
                    guid: ::catalog_types::Field::Absent,
                    status: ::catalog_types::Field::Absent,
                    version: ::catalog_types::Field::Absent,
                    created_by: ::catalog_types::Field::Absent,
                    updated_by: ::catalog_types::Field::Absent,
                    create_time: ::catalog_types::Field::Absent,
                    update_time: ::catalog_types::Field::Absent,
                    is_incomplete: ::catalog_types::Field::Absent,
                    labels: ::catalog_types::Field::Absent,
                    $( $attr: ::catalog_types::Field::Absent, )*
                    $( $rel: ::catalog_types::Field::Absent, )*
                }
            }
        }

        impl $crate::entity::Entity for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn shape() -> &'static $crate::schema::EntityShape {
                &Self::SHAPE
            }

            fn guid(&self) -> Option<&str> {
                self.guid.value().map(String::as_str)
            }
        }
    };
}

pub(crate) use entity;
