//! Schema introspection.
//!
//! Every flat entity type carries a static [`EntityShape`] emitted by the
//! `entity!` generator. A [`SchemaCatalog`] collects those shapes (or
//! definitions loaded from type-definition JSON) and resolves a type name to
//! the complete, inherited field list the conversion engine walks. Resolution
//! happens once per type and is shared afterwards.

use crate::error::{SchemaError, SchemaResult};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Wire key holding the entity type name.
pub const TYPE_NAME_KEY: &str = "typeName";

/// Wire key of the type-specific attributes sub-object.
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Wire keys of the three relationship buckets, in merge priority order.
pub const RELATIONSHIP_BUCKET_KEYS: [&str; 3] = [
    "relationshipAttributes",
    "appendRelationshipAttributes",
    "removeRelationshipAttributes",
];

/// Entity header fields shared by every type. These live at the top level of
/// the nested wire entity, next to `typeName`.
pub const CORE_FIELDS: &[&str] = &[
    "guid",
    "status",
    "version",
    "createdBy",
    "updatedBy",
    "createTime",
    "updateTime",
    "isIncomplete",
    "labels",
];

/// Static field-name table of one generated entity type.
///
/// Generated tables list the full inherited field set, so `supertypes` is only
/// used for `is_a` checks and for catalogs that mix generated and loaded types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityShape {
    pub type_name: &'static str,
    pub supertypes: &'static [&'static str],
    /// Attribute wire names.
    pub attributes: &'static [&'static str],
    /// Relationship wire names.
    pub relationships: &'static [&'static str],
}

/// Owned type definition, as registered in a [`SchemaCatalog`].
///
/// Unlike [`EntityShape`], a definition loaded from the remote type system
/// lists only the fields its type declares itself; inherited ones are filled
/// in during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: String,
    pub supertypes: Vec<String>,
    pub attributes: Vec<String>,
    pub relationships: Vec<String>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supertypes: Vec::new(),
            attributes: Vec::new(),
            relationships: Vec::new(),
        }
    }

    #[must_use]
    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    #[must_use]
    pub fn relationship(mut self, name: impl Into<String>) -> Self {
        self.relationships.push(name.into());
        self
    }
}

impl From<&EntityShape> for TypeDef {
    fn from(shape: &EntityShape) -> Self {
        let owned = |names: &[&str]| names.iter().map(|n| (*n).to_string()).collect();
        Self {
            name: shape.type_name.to_string(),
            supertypes: owned(shape.supertypes),
            attributes: owned(shape.attributes),
            relationships: owned(shape.relationships),
        }
    }
}

/// The sub-shapes of a resolved entity the introspector can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Fields of the nested `attributes` object.
    Attributes,
    /// Fields that may appear inside a relationship bucket.
    Relationships,
    /// Top-level keys of the nested wire entity.
    Nested,
}

/// Complete field list of one entity type, inherited fields included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShape {
    type_name: String,
    /// Ancestors, root first.
    lineage: Vec<String>,
    attributes: Vec<String>,
    relationships: Vec<String>,
}

impl ResolvedShape {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }

    pub fn attribute_fields(&self) -> &[String] {
        &self.attributes
    }

    pub fn relationship_fields(&self) -> &[String] {
        &self.relationships
    }

    pub fn core_fields(&self) -> &'static [&'static str] {
        CORE_FIELDS
    }

    /// True if this type is `type_name` or inherits from it.
    pub fn is_a(&self, type_name: &str) -> bool {
        self.type_name == type_name || self.lineage.iter().any(|t| t == type_name)
    }

    /// Ordered field names of the requested sub-shape.
    pub fn fields(&self, kind: ShapeKind) -> Vec<&str> {
        match kind {
            ShapeKind::Attributes => self.attributes.iter().map(String::as_str).collect(),
            ShapeKind::Relationships => self.relationships.iter().map(String::as_str).collect(),
            ShapeKind::Nested => std::iter::once(TYPE_NAME_KEY)
                .chain(CORE_FIELDS.iter().copied())
                .chain(std::iter::once(ATTRIBUTES_KEY))
                .chain(RELATIONSHIP_BUCKET_KEYS)
                .collect(),
        }
    }
}

/// Registry of entity type definitions with memoized inheritance resolution.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    defs: HashMap<String, TypeDef>,
    resolved: DashMap<String, Arc<ResolvedShape>>,
}

impl SchemaCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding every generated entity type of this crate.
    pub fn with_builtin_types() -> Self {
        let mut catalog = Self::new();
        for shape in crate::assets::BUILTIN_SHAPES {
            catalog.defs.insert(shape.type_name.to_string(), TypeDef::from(*shape));
        }
        catalog
    }

    /// Process-wide catalog of the generated entity types, built on first use.
    pub fn builtin() -> Arc<SchemaCatalog> {
        static BUILTIN: OnceLock<Arc<SchemaCatalog>> = OnceLock::new();
        Arc::clone(BUILTIN.get_or_init(|| Arc::new(SchemaCatalog::with_builtin_types())))
    }

    /// Registers a type definition. Supertypes may be registered later; they
    /// are only looked up during resolution.
    pub fn register(&mut self, def: TypeDef) -> SchemaResult<()> {
        if self.defs.contains_key(&def.name) {
            return Err(SchemaError::DuplicateType(def.name));
        }
        self.defs.insert(def.name.clone(), def);
        Ok(())
    }

    pub fn register_shape(&mut self, shape: &EntityShape) -> SchemaResult<()> {
        self.register(TypeDef::from(shape))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.defs.contains_key(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.defs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Resolves a type name to its full inherited field list.
    ///
    /// Unknown types, unknown supertypes and cycles are errors; nothing falls
    /// back to an empty field set.
    pub fn resolve(&self, type_name: &str) -> SchemaResult<Arc<ResolvedShape>> {
        if let Some(shape) = self.resolved.get(type_name) {
            return Ok(Arc::clone(&shape));
        }
        let shape = Arc::new(self.compute(type_name, &mut Vec::new())?);
        debug!(
            type_name,
            attributes = shape.attributes.len(),
            relationships = shape.relationships.len(),
            "resolved entity shape"
        );
        Ok(Arc::clone(
            self.resolved.entry(type_name.to_string()).or_insert(shape).value(),
        ))
    }

    fn compute(&self, type_name: &str, stack: &mut Vec<String>) -> SchemaResult<ResolvedShape> {
        if stack.iter().any(|t| t == type_name) {
            return Err(SchemaError::InheritanceCycle(type_name.to_string()));
        }
        let def = self
            .defs
            .get(type_name)
            .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))?;

        stack.push(type_name.to_string());
        let mut lineage = Vec::new();
        let mut attributes = Vec::new();
        let mut relationships = Vec::new();

        for supertype in &def.supertypes {
            if !self.defs.contains_key(supertype) {
                return Err(SchemaError::UnknownSupertype {
                    type_name: type_name.to_string(),
                    supertype: supertype.clone(),
                });
            }
            let cached = self.resolved.get(supertype.as_str()).map(|p| Arc::clone(&p));
            let parent = match cached {
                Some(parent) => parent,
                None => Arc::new(self.compute(supertype, stack)?),
            };
            extend_unique(&mut lineage, &parent.lineage);
            extend_unique(&mut lineage, std::slice::from_ref(&parent.type_name));
            extend_unique(&mut attributes, &parent.attributes);
            extend_unique(&mut relationships, &parent.relationships);
        }
        stack.pop();

        extend_unique(&mut attributes, &def.attributes);
        extend_unique(&mut relationships, &def.relationships);
        attributes.retain(|a| !relationships.contains(a));

        Ok(ResolvedShape {
            type_name: type_name.to_string(),
            lineage,
            attributes,
            relationships,
        })
    }
}

fn extend_unique(target: &mut Vec<String>, names: &[String]) {
    for name in names {
        if !target.contains(name) {
            target.push(name.clone());
        }
    }
}
