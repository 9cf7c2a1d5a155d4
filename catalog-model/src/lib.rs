//! Entity model for the catalog client.
//!
//! - [`SchemaCatalog`] / [`ResolvedShape`]: introspection of entity shapes,
//!   inherited fields included
//! - [`Entity`] and the generated flat types in [`assets`]
//! - [`RelatedRef`]: a tagged reference to another entity
//! - [`relations`]: builders that attach relationship metadata to references
//!
//! The mapping between flat entities and the nested wire layout lives in
//! `catalog-codec`; this crate only describes what the entities look like.

pub mod assets;
mod entity;
mod error;
mod reference;
pub mod relations;
mod schema;
mod typedef;

pub use assets::{
    Asset, AtlasGlossary, AtlasGlossaryCategory, AtlasGlossaryTerm, Column, Referenceable, Table,
};
pub use entity::Entity;
pub use error::{SchemaError, SchemaResult};
pub use reference::{RelatedRef, RelationshipAttributes, SEMANTIC_KEY};
pub use schema::{
    ATTRIBUTES_KEY, CORE_FIELDS, EntityShape, RELATIONSHIP_BUCKET_KEYS, ResolvedShape,
    SchemaCatalog, ShapeKind, TYPE_NAME_KEY, TypeDef,
};
