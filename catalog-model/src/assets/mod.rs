//! Generated flat entity types.
//!
//! Each type lists its complete inherited field set so callers can read and
//! write every attribute and relationship directly. The wire layout is
//! derived from the static [`EntityShape`] tables, never from these structs.

mod asset;
mod glossary;
mod sql;

pub use asset::{Asset, Referenceable};
pub use glossary::{AtlasGlossary, AtlasGlossaryCategory, AtlasGlossaryTerm};
pub use sql::{Column, Table};

use crate::schema::EntityShape;

/// Every generated shape, registered by `SchemaCatalog::with_builtin_types`.
pub const BUILTIN_SHAPES: &[&EntityShape] = &[
    &Referenceable::SHAPE,
    &Asset::SHAPE,
    &AtlasGlossary::SHAPE,
    &AtlasGlossaryTerm::SHAPE,
    &AtlasGlossaryCategory::SHAPE,
    &Table::SHAPE,
    &Column::SHAPE,
];
