//! Loading entity definitions from the remote type-definition JSON.
//!
//! Only the parts the conversion engine needs are read: names, supertypes,
//! and the names of attribute and relationship attribute definitions.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{SchemaCatalog, TypeDef};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeDefsDocument {
    #[serde(default)]
    entity_defs: Vec<EntityDefJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityDefJson {
    name: String,
    #[serde(default)]
    super_types: Vec<String>,
    #[serde(default)]
    attribute_defs: Vec<NamedDef>,
    #[serde(default)]
    relationship_attribute_defs: Vec<NamedDef>,
}

#[derive(Debug, Deserialize)]
struct NamedDef {
    name: String,
}

impl From<EntityDefJson> for TypeDef {
    fn from(def: EntityDefJson) -> Self {
        Self {
            name: def.name,
            supertypes: def.super_types,
            attributes: def.attribute_defs.into_iter().map(|a| a.name).collect(),
            relationships: def
                .relationship_attribute_defs
                .into_iter()
                .map(|r| r.name)
                .collect(),
        }
    }
}

impl SchemaCatalog {
    /// Builds a catalog from a type-definition document.
    pub fn from_typedefs_json(bytes: &[u8]) -> SchemaResult<Self> {
        let mut catalog = Self::new();
        catalog.load_typedefs_json(bytes)?;
        Ok(catalog)
    }

    /// Adds every entity definition of a type-definition document.
    ///
    /// Returns the number of definitions registered. A name that is already
    /// registered, or that appears twice in the document, aborts the load and
    /// leaves the catalog unchanged.
    pub fn load_typedefs_json(&mut self, bytes: &[u8]) -> SchemaResult<usize> {
        let document: TypeDefsDocument = serde_json::from_slice(bytes)
            .map_err(|e| SchemaError::InvalidTypeDefs(e.to_string()))?;

        {
            let mut names = HashSet::with_capacity(document.entity_defs.len());
            for def in &document.entity_defs {
                if self.contains(&def.name) || !names.insert(def.name.as_str()) {
                    return Err(SchemaError::DuplicateType(def.name.clone()));
                }
            }
        }

        let count = document.entity_defs.len();
        for def in document.entity_defs {
            self.register(def.into())?;
        }
        debug!(count, "loaded entity type definitions");
        Ok(count)
    }
}
