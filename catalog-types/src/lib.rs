//! Core value types for the catalog entity engine.
//!
//! This crate defines the primitives every generated entity field is built from:
//! - [`Field<T>`]: the tri-state container (absent, explicit null, value)
//! - [`SemanticTag`]: the write intent attached to a relationship reference
//! - Wire enumerations shared by entity attributes and relationship metadata
//!
//! Nothing here knows about entity shapes or the nested wire layout; those live
//! in `catalog-model` and `catalog-codec`.

mod enums;
mod field;
mod semantic;

pub use enums::{CertificateStatus, EntityStatus, TermAssignmentStatus, TermRelationshipStatus};
pub use field::{Field, serialize_finite};
pub use semantic::SemanticTag;

/// Result type alias using the crate's error type.
pub type TypeResult<T> = std::result::Result<T, TypeError>;

/// Errors raised when parsing wire spellings into typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("unrecognized relationship semantic: {0}")]
    UnknownSemantic(String),

    #[error("unrecognized {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
