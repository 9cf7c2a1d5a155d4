//! Per-shape codecs and the shared codec cache.

use crate::convert::{flat_to_nested, from_flat_map, nested_to_flat, to_flat_map};
use crate::error::{CodecError, CodecResult};
use crate::nested::NestedEntity;
use catalog_model::{Entity, ResolvedShape, SchemaCatalog};
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// Maximum encoded entity size (16 MB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Codec settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Payloads larger than this are rejected in both directions.
    pub max_payload_bytes: usize,
    /// Pretty-print encoded JSON.
    pub pretty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            pretty: false,
        }
    }
}

/// Converter bound to one resolved entity shape.
///
/// Built once per type by [`Codec::for_type`] and shared read-only.
#[derive(Debug, Clone)]
pub struct EntityCodec {
    shape: Arc<ResolvedShape>,
    config: CodecConfig,
}

impl EntityCodec {
    pub fn new(shape: Arc<ResolvedShape>, config: CodecConfig) -> Self {
        Self { shape, config }
    }

    pub fn shape(&self) -> &ResolvedShape {
        &self.shape
    }

    pub fn type_name(&self) -> &str {
        self.shape.type_name()
    }

    /// Flat field map to nested wire entity.
    pub fn to_nested(&self, flat: &Map<String, Value>) -> CodecResult<NestedEntity> {
        flat_to_nested(flat, &self.shape)
    }

    /// Nested wire entity to flat field map.
    pub fn to_flat(&self, nested: &NestedEntity) -> CodecResult<Map<String, Value>> {
        nested_to_flat(nested, &self.shape)
    }

    /// Encodes a flat field map into nested wire bytes.
    pub fn encode_flat(&self, flat: &Map<String, Value>) -> CodecResult<Vec<u8>> {
        self.encode_nested(&self.to_nested(flat)?)
    }

    /// Decodes nested wire bytes into a flat field map.
    pub fn decode_flat(&self, data: &[u8]) -> CodecResult<Map<String, Value>> {
        self.to_flat(&self.decode_nested(data)?)
    }

    pub fn encode_nested(&self, nested: &NestedEntity) -> CodecResult<Vec<u8>> {
        let data = if self.config.pretty {
            serde_json::to_vec_pretty(nested)
        } else {
            serde_json::to_vec(nested)
        }
        .map_err(CodecError::Encode)?;

        self.check_size(data.len())?;
        trace!(type_name = self.type_name(), bytes = data.len(), "encoded entity");
        Ok(data)
    }

    pub fn decode_nested(&self, data: &[u8]) -> CodecResult<NestedEntity> {
        self.check_size(data.len())?;
        trace!(type_name = self.type_name(), bytes = data.len(), "decoding entity");
        serde_json::from_slice(data).map_err(|source| CodecError::Decode {
            type_name: self.type_name().to_string(),
            source,
        })
    }

    fn check_size(&self, size: usize) -> CodecResult<()> {
        if size > self.config.max_payload_bytes {
            return Err(CodecError::PayloadTooLarge {
                size,
                max: self.config.max_payload_bytes,
            });
        }
        Ok(())
    }
}

/// Entry point for conversion and encoding.
///
/// Holds a schema catalog and lazily builds one [`EntityCodec`] per entity
/// type. Concurrent first use of a type constructs a single codec; every
/// caller gets the same shared instance.
#[derive(Debug)]
pub struct Codec {
    catalog: Arc<SchemaCatalog>,
    config: CodecConfig,
    codecs: DashMap<String, Arc<EntityCodec>>,
}

impl Codec {
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self::with_config(catalog, CodecConfig::default())
    }

    pub fn with_config(catalog: Arc<SchemaCatalog>, config: CodecConfig) -> Self {
        Self {
            catalog,
            config,
            codecs: DashMap::new(),
        }
    }

    /// Process-wide codec over the built-in entity types.
    pub fn global() -> &'static Codec {
        static GLOBAL: OnceLock<Codec> = OnceLock::new();
        GLOBAL.get_or_init(|| Codec::new(SchemaCatalog::builtin()))
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The codec for `type_name`, built on first request.
    pub fn for_type(&self, type_name: &str) -> CodecResult<Arc<EntityCodec>> {
        if let Some(codec) = self.codecs.get(type_name) {
            return Ok(Arc::clone(&codec));
        }
        // Resolve outside the entry lock.
        let shape = self.catalog.resolve(type_name)?;
        let entry = self.codecs.entry(type_name.to_string()).or_insert_with(|| {
            debug!(type_name, "building entity codec");
            Arc::new(EntityCodec::new(shape, self.config.clone()))
        });
        Ok(Arc::clone(entry.value()))
    }

    /// Type names with a cached codec.
    pub fn cached_types(&self) -> Vec<String> {
        let mut names: Vec<String> = self.codecs.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn to_nested<E: Entity>(&self, entity: &E) -> CodecResult<NestedEntity> {
        let codec = self.for_type(E::TYPE_NAME)?;
        codec.to_nested(&to_flat_map(entity)?)
    }

    pub fn from_nested<E: Entity>(&self, nested: &NestedEntity) -> CodecResult<E> {
        let codec = self.for_type(E::TYPE_NAME)?;
        from_flat_map(codec.to_flat(nested)?)
    }

    /// Encodes a flat entity into nested wire bytes.
    pub fn encode<E: Entity>(&self, entity: &E) -> CodecResult<Vec<u8>> {
        let codec = self.for_type(E::TYPE_NAME)?;
        codec.encode_flat(&to_flat_map(entity)?)
    }

    /// Decodes nested wire bytes into a flat entity.
    pub fn decode<E: Entity>(&self, data: &[u8]) -> CodecResult<E> {
        let codec = self.for_type(E::TYPE_NAME)?;
        from_flat_map(codec.decode_flat(data)?)
    }

    /// Encodes a flat field map whose type is only known at runtime.
    pub fn encode_dynamic(
        &self,
        type_name: &str,
        flat: &Map<String, Value>,
    ) -> CodecResult<Vec<u8>> {
        self.for_type(type_name)?.encode_flat(flat)
    }

    pub fn decode_dynamic(&self, type_name: &str, data: &[u8]) -> CodecResult<Map<String, Value>> {
        self.for_type(type_name)?.decode_flat(data)
    }
}

/// Encodes `entity` with the global codec.
pub fn encode<E: Entity>(entity: &E) -> CodecResult<Vec<u8>> {
    Codec::global().encode(entity)
}

/// Decodes wire bytes with the global codec.
pub fn decode<E: Entity>(data: &[u8]) -> CodecResult<E> {
    Codec::global().decode(data)
}
