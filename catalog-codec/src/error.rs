//! Error types for conversion and encoding.

use catalog_model::SchemaError;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while converting or encoding entities.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The target shape could not be resolved.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to encode entity: {0}")]
    Encode(#[source] serde_json::Error),

    /// Wire bytes do not match the expected shape.
    #[error("failed to decode {type_name}: {source}")]
    Decode {
        type_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected entity type {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("{type_name} did not serialize to a JSON object")]
    NotAnObject { type_name: String },

    /// A reference carries a semantic tag that is not REPLACE, APPEND or REMOVE.
    #[error("unrecognized semantic {value} on relationship {field}")]
    UnknownSemantic { field: String, value: String },

    /// The same target appears with different semantics in one relationship.
    #[error("relationship {field} tags target {target} with conflicting semantics")]
    ConflictingSemantic { field: String, target: String },

    #[error("invalid relationship {field}: {reason}")]
    InvalidRelationship { field: String, reason: String },

    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

impl CodecError {
    /// True for failures caused by malformed wire bytes.
    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::Decode { .. })
    }

    /// True for failures caused by relationship semantic tags.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            CodecError::UnknownSemantic { .. } | CodecError::ConflictingSemantic { .. }
        )
    }
}
