//! Flat ⇄ nested conversion.
//!
//! Every function works on JSON object maps keyed by wire field name, which is
//! how a generated flat entity serializes. A missing key means the field is
//! absent, and no stage ever invents one.

use crate::error::{CodecError, CodecResult};
use crate::nested::{NestedEntity, RelationshipBuckets};
use catalog_model::{Entity, ResolvedShape, SEMANTIC_KEY, TYPE_NAME_KEY};
use catalog_types::SemanticTag;
use serde_json::{Map, Value};
use tracing::debug;

/// Serializes a flat entity into its field map. Absent fields have no key.
pub fn to_flat_map<E: Entity>(entity: &E) -> CodecResult<Map<String, Value>> {
    match serde_json::to_value(entity).map_err(CodecError::Encode)? {
        Value::Object(map) => Ok(map),
        _ => Err(CodecError::NotAnObject {
            type_name: E::TYPE_NAME.to_string(),
        }),
    }
}

/// Builds a flat entity from its field map.
pub fn from_flat_map<E: Entity>(flat: Map<String, Value>) -> CodecResult<E> {
    serde_json::from_value(Value::Object(flat)).map_err(|source| CodecError::Decode {
        type_name: E::TYPE_NAME.to_string(),
        source,
    })
}

/// Copies every listed attribute present on `source`.
pub fn build_attributes_kwargs(
    source: &Map<String, Value>,
    attribute_fields: &[String],
) -> Map<String, Value> {
    attribute_fields
        .iter()
        .filter_map(|name| source.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

/// Splits relationship fields into replace, append and remove buckets.
///
/// A single reference is routed by its own tag. A collection is routed element
/// by element, so one field may land in several buckets, each holding a list
/// in the original relative order. `null` and `[]` are explicit clears and go
/// to the replace bucket.
pub fn categorize_relationships(
    entity: &Map<String, Value>,
    relationship_fields: &[String],
) -> CodecResult<RelationshipBuckets> {
    let mut buckets = RelationshipBuckets::default();

    for field in relationship_fields {
        let Some(value) = entity.get(field) else {
            continue;
        };
        match value {
            Value::Null => buckets.insert(SemanticTag::Replace, field, Value::Null),
            Value::Object(reference) => {
                let (semantic, reference) = untag(field, reference)?;
                buckets.insert(semantic, field, Value::Object(reference));
            }
            Value::Array(references) if references.is_empty() => {
                buckets.insert(SemanticTag::Replace, field, Value::Array(Vec::new()));
            }
            Value::Array(references) => {
                let mut routed: [Vec<Value>; 3] = Default::default();
                let mut seen: Vec<(Value, SemanticTag)> = Vec::new();

                for element in references {
                    let Value::Object(reference) = element else {
                        return Err(CodecError::InvalidRelationship {
                            field: field.clone(),
                            reason: format!("expected a reference object, found {}", kind(element)),
                        });
                    };
                    let (semantic, reference) = untag(field, reference)?;
                    if let Some(target) = target_identity(&reference) {
                        match seen.iter().find(|(t, _)| *t == target) {
                            Some((_, prior)) if *prior != semantic => {
                                return Err(CodecError::ConflictingSemantic {
                                    field: field.clone(),
                                    target: target.to_string(),
                                });
                            }
                            Some(_) => {}
                            None => seen.push((target, semantic)),
                        }
                    }
                    routed[priority(semantic)].push(Value::Object(reference));
                }

                for (semantic, references) in SemanticTag::PRIORITY.into_iter().zip(routed) {
                    if !references.is_empty() {
                        buckets.insert(semantic, field, Value::Array(references));
                    }
                }
            }
            other => {
                return Err(CodecError::InvalidRelationship {
                    field: field.clone(),
                    reason: format!(
                        "expected a reference or a list of references, found {}",
                        kind(other)
                    ),
                });
            }
        }
    }

    Ok(buckets)
}

/// Folds the three buckets back into one relationship map.
///
/// For each field the first bucket holding it wins, in replace, append,
/// remove order. References taken from the append or remove bucket get their
/// tag back so the flat entity keeps the write intent.
pub fn merge_relationships(
    replace: Option<&Map<String, Value>>,
    append: Option<&Map<String, Value>>,
    remove: Option<&Map<String, Value>>,
    relationship_fields: &[String],
) -> Map<String, Value> {
    let buckets = [
        (SemanticTag::Replace, replace),
        (SemanticTag::Append, append),
        (SemanticTag::Remove, remove),
    ];
    let mut merged = Map::new();

    for field in relationship_fields {
        let first = buckets
            .iter()
            .find_map(|(semantic, bucket)| bucket.and_then(|b| b.get(field)).map(|v| (*semantic, v)));
        if let Some((semantic, value)) = first {
            merged.insert(field.clone(), retag(value, semantic));
        }
    }

    merged
}

/// Assembles the flat field map from a nested entity.
pub fn build_flat_kwargs(
    nested: &NestedEntity,
    attributes: &Map<String, Value>,
    merged_relationships: Map<String, Value>,
    shape: &ResolvedShape,
) -> Map<String, Value> {
    let mut flat = Map::new();
    flat.insert(TYPE_NAME_KEY.to_string(), Value::String(nested.type_name.clone()));
    for field in shape.core_fields() {
        if let Some(value) = nested.core.get(*field) {
            flat.insert((*field).to_string(), value.clone());
        }
    }
    flat.extend(build_attributes_kwargs(attributes, shape.attribute_fields()));
    flat.extend(merged_relationships);
    flat
}

/// Converts a flat field map into the nested wire layout of `shape`.
pub fn flat_to_nested(
    flat: &Map<String, Value>,
    shape: &ResolvedShape,
) -> CodecResult<NestedEntity> {
    let type_name = match flat.get(TYPE_NAME_KEY) {
        None => shape.type_name().to_string(),
        Some(Value::String(t)) if t == shape.type_name() => t.clone(),
        Some(other) => return Err(type_mismatch(shape, other)),
    };

    let core = shape
        .core_fields()
        .iter()
        .filter_map(|field| flat.get(*field).map(|v| ((*field).to_string(), v.clone())))
        .collect();
    let attributes = build_attributes_kwargs(flat, shape.attribute_fields());
    let buckets = categorize_relationships(flat, shape.relationship_fields())?;

    let unknown: Vec<&str> = flat
        .keys()
        .map(String::as_str)
        .filter(|key| !is_flat_field(shape, key))
        .collect();
    if !unknown.is_empty() {
        debug!(type_name = shape.type_name(), ?unknown, "dropping fields not declared by shape");
    }

    let mut nested = NestedEntity {
        type_name,
        core,
        attributes,
        ..Default::default()
    };
    nested.set_buckets(buckets);
    Ok(nested)
}

/// Converts a nested wire entity into the flat field map of `shape`.
pub fn nested_to_flat(
    nested: &NestedEntity,
    shape: &ResolvedShape,
) -> CodecResult<Map<String, Value>> {
    if nested.type_name != shape.type_name() {
        return Err(CodecError::TypeMismatch {
            expected: shape.type_name().to_string(),
            found: nested.type_name.clone(),
        });
    }

    let unknown: Vec<&str> = nested
        .attributes
        .keys()
        .map(String::as_str)
        .filter(|key| !shape.attribute_fields().iter().any(|a| a == key))
        .collect();
    if !unknown.is_empty() {
        debug!(type_name = shape.type_name(), ?unknown, "dropping attributes not declared by shape");
    }

    for semantic in SemanticTag::PRIORITY {
        let Some(bucket) = nested.bucket(semantic) else {
            continue;
        };
        let unknown: Vec<&str> = bucket
            .keys()
            .map(String::as_str)
            .filter(|key| !shape.relationship_fields().iter().any(|r| r == key))
            .collect();
        if !unknown.is_empty() {
            debug!(
                type_name = shape.type_name(),
                bucket = semantic.bucket_key(),
                ?unknown,
                "dropping relationships not declared by shape"
            );
        }
    }

    let merged = merge_relationships(
        nested.relationship_attributes.as_ref(),
        nested.append_relationship_attributes.as_ref(),
        nested.remove_relationship_attributes.as_ref(),
        shape.relationship_fields(),
    );
    Ok(build_flat_kwargs(nested, &nested.attributes, merged, shape))
}

fn untag(field: &str, reference: &Map<String, Value>) -> CodecResult<(SemanticTag, Map<String, Value>)> {
    let mut reference = reference.clone();
    let semantic = match reference.remove(SEMANTIC_KEY) {
        None => SemanticTag::Replace,
        Some(Value::String(tag)) => match tag.parse() {
            Ok(semantic) => semantic,
            Err(_) => {
                return Err(CodecError::UnknownSemantic {
                    field: field.to_string(),
                    value: tag,
                });
            }
        },
        Some(other) => {
            return Err(CodecError::UnknownSemantic {
                field: field.to_string(),
                value: other.to_string(),
            });
        }
    };
    Ok((semantic, reference))
}

fn retag(value: &Value, semantic: SemanticTag) -> Value {
    if semantic.is_replace() {
        return value.clone();
    }
    match value {
        Value::Object(reference) => {
            let mut reference = reference.clone();
            reference.insert(
                SEMANTIC_KEY.to_string(),
                Value::String(semantic.as_str().to_string()),
            );
            Value::Object(reference)
        }
        Value::Array(references) => {
            Value::Array(references.iter().map(|r| retag(r, semantic)).collect())
        }
        other => other.clone(),
    }
}

/// Identity of the entity a reference points at: its guid, or its type name
/// plus unique attributes. References with neither are never compared.
fn target_identity(reference: &Map<String, Value>) -> Option<Value> {
    if let Some(guid) = reference.get("guid").filter(|g| !g.is_null()) {
        return Some(guid.clone());
    }
    let unique = reference.get("uniqueAttributes").filter(|u| !u.is_null())?;
    let mut identity = Map::new();
    if let Some(type_name) = reference.get(TYPE_NAME_KEY) {
        identity.insert(TYPE_NAME_KEY.to_string(), type_name.clone());
    }
    identity.insert("uniqueAttributes".to_string(), unique.clone());
    Some(Value::Object(identity))
}

fn priority(semantic: SemanticTag) -> usize {
    match semantic {
        SemanticTag::Replace => 0,
        SemanticTag::Append => 1,
        SemanticTag::Remove => 2,
    }
}

fn is_flat_field(shape: &ResolvedShape, key: &str) -> bool {
    key == TYPE_NAME_KEY
        || shape.core_fields().contains(&key)
        || shape.attribute_fields().iter().any(|a| a == key)
        || shape.relationship_fields().iter().any(|r| r == key)
}

fn type_mismatch(shape: &ResolvedShape, found: &Value) -> CodecError {
    CodecError::TypeMismatch {
        expected: shape.type_name().to_string(),
        found: match found {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
