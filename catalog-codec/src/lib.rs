//! Conversion engine and wire codec for catalog entities.
//!
//! A flat entity exposes every inherited attribute and relationship as a
//! direct field. The remote API expects a nested layout instead:
//!
//! ```text
//! { typeName, guid, status, ...,
//!   attributes: { ... },
//!   relationshipAttributes: { ... },        // REPLACE-tagged references
//!   appendRelationshipAttributes: { ... },  // APPEND-tagged references
//!   removeRelationshipAttributes: { ... } } // REMOVE-tagged references
//! ```
//!
//! [`convert`] maps between the two shapes over plain JSON maps, driven only by
//! the field tables of a [`catalog_model::ResolvedShape`]. [`Codec`] caches one
//! [`EntityCodec`] per entity type and turns entities into bytes and back.
//!
//! Field presence survives every stage: an absent field produces no key, an
//! explicit null produces `null`.

mod codec;
pub mod convert;
mod error;
mod nested;

pub use codec::{Codec, CodecConfig, DEFAULT_MAX_PAYLOAD_BYTES, EntityCodec, decode, encode};
pub use error::{CodecError, CodecResult};
pub use nested::{NestedEntity, RelationshipBuckets};
