//! Error types for schema introspection.

use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while registering or resolving entity types.
///
/// All of these point at a programming or configuration mistake; none are
/// transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The catalog has no definition for this type.
    #[error("unknown entity type: {0}")]
    UnknownType(String),

    /// A definition names a supertype the catalog does not hold.
    #[error("entity type {type_name} extends unknown supertype {supertype}")]
    UnknownSupertype { type_name: String, supertype: String },

    #[error("inheritance cycle through entity type {0}")]
    InheritanceCycle(String),

    #[error("entity type already registered: {0}")]
    DuplicateType(String),

    /// Type-definition JSON could not be parsed.
    #[error("invalid type definitions: {0}")]
    InvalidTypeDefs(String),
}
