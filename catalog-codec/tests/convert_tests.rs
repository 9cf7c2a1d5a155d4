use catalog_codec::CodecError;
use catalog_codec::convert::{
    build_attributes_kwargs, build_flat_kwargs, categorize_relationships, flat_to_nested,
    merge_relationships, nested_to_flat,
};
use catalog_model::{SchemaCatalog, TypeDef};
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn names(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| (*f).to_string()).collect()
}

// ── build_attributes_kwargs ──────────────────────────────────────

#[test]
fn attributes_copy_only_present_keys() {
    let source = object(json!({
        "name": "Customer",
        "description": null,
        "synonyms": [],
        "unrelated": 1,
    }));
    let attributes = build_attributes_kwargs(&source, &names(&["name", "description", "usage"]));

    assert_eq!(
        Value::Object(attributes),
        json!({ "name": "Customer", "description": null })
    );
}

#[test]
fn attributes_of_empty_source_are_empty() {
    let attributes = build_attributes_kwargs(&Map::new(), &names(&["name"]));
    assert!(attributes.is_empty());
}

// ── categorize_relationships ─────────────────────────────────────

#[test]
fn untagged_references_go_to_replace_bucket() {
    let entity = object(json!({
        "anchor": { "guid": "g1", "typeName": "AtlasGlossary" },
        "synonyms": [{ "guid": "t1" }, { "guid": "t2" }],
    }));
    let buckets = categorize_relationships(&entity, &names(&["anchor", "synonyms"])).unwrap();

    assert_eq!(
        buckets.replace.map(Value::Object),
        Some(json!({
            "anchor": { "guid": "g1", "typeName": "AtlasGlossary" },
            "synonyms": [{ "guid": "t1" }, { "guid": "t2" }],
        }))
    );
    assert!(buckets.append.is_none());
    assert!(buckets.remove.is_none());
}

#[test]
fn tagged_single_reference_goes_to_its_bucket_without_tag() {
    let entity = object(json!({
        "readme": { "guid": "r1", "semantic": "REMOVE" },
    }));
    let buckets = categorize_relationships(&entity, &names(&["readme"])).unwrap();

    assert!(buckets.replace.is_none());
    assert!(buckets.append.is_none());
    assert_eq!(
        buckets.remove.map(Value::Object),
        Some(json!({ "readme": { "guid": "r1" } }))
    );
}

#[test]
fn mixed_collection_is_split_preserving_order() {
    let entity = object(json!({
        "seeAlso": [
            { "guid": "a", "semantic": "APPEND" },
            { "guid": "b" },
            { "guid": "c", "semantic": "REMOVE" },
            { "guid": "d", "semantic": "APPEND" },
            { "guid": "e", "semantic": "REPLACE" },
        ],
    }));
    let buckets = categorize_relationships(&entity, &names(&["seeAlso"])).unwrap();

    assert_eq!(
        buckets.replace.map(Value::Object),
        Some(json!({ "seeAlso": [{ "guid": "b" }, { "guid": "e" }] }))
    );
    assert_eq!(
        buckets.append.map(Value::Object),
        Some(json!({ "seeAlso": [{ "guid": "a" }, { "guid": "d" }] }))
    );
    assert_eq!(
        buckets.remove.map(Value::Object),
        Some(json!({ "seeAlso": [{ "guid": "c" }] }))
    );
}

#[test]
fn null_and_empty_list_are_replace_clears() {
    let entity = object(json!({ "readme": null, "links": [] }));
    let buckets = categorize_relationships(&entity, &names(&["readme", "links"])).unwrap();

    assert_eq!(
        buckets.replace.map(Value::Object),
        Some(json!({ "readme": null, "links": [] }))
    );
    assert!(buckets.append.is_none());
    assert!(buckets.remove.is_none());
}

#[test]
fn absent_relationships_produce_no_buckets() {
    let entity = object(json!({ "name": "x" }));
    let buckets = categorize_relationships(&entity, &names(&["readme", "links"])).unwrap();
    assert!(buckets.is_empty());
}

#[test]
fn unrecognized_semantic_is_rejected() {
    let entity = object(json!({ "links": [{ "guid": "a", "semantic": "UPSERT" }] }));
    let err = categorize_relationships(&entity, &names(&["links"])).unwrap_err();

    assert!(err.is_semantic());
    assert!(matches!(
        err,
        CodecError::UnknownSemantic { ref field, ref value } if field == "links" && value == "UPSERT"
    ));
}

#[test]
fn lowercase_semantic_is_rejected() {
    let entity = object(json!({ "readme": { "guid": "a", "semantic": "append" } }));
    let err = categorize_relationships(&entity, &names(&["readme"])).unwrap_err();
    assert!(matches!(err, CodecError::UnknownSemantic { .. }));
}

#[test]
fn non_string_semantic_is_rejected() {
    let entity = object(json!({ "readme": { "guid": "a", "semantic": 1 } }));
    let err = categorize_relationships(&entity, &names(&["readme"])).unwrap_err();
    assert!(matches!(err, CodecError::UnknownSemantic { .. }));
}

#[test]
fn same_target_with_different_semantics_is_a_conflict() {
    let entity = object(json!({
        "synonyms": [
            { "guid": "t1", "semantic": "APPEND" },
            { "guid": "t1", "semantic": "REMOVE" },
        ],
    }));
    let err = categorize_relationships(&entity, &names(&["synonyms"])).unwrap_err();

    assert!(err.is_semantic());
    assert!(matches!(
        err,
        CodecError::ConflictingSemantic { ref field, .. } if field == "synonyms"
    ));
}

#[test]
fn same_qualified_name_with_different_semantics_is_a_conflict() {
    let unique = json!({ "qualifiedName": "glossary/term" });
    let entity = object(json!({
        "synonyms": [
            { "typeName": "AtlasGlossaryTerm", "uniqueAttributes": unique },
            { "typeName": "AtlasGlossaryTerm", "uniqueAttributes": unique, "semantic": "REMOVE" },
        ],
    }));
    let err = categorize_relationships(&entity, &names(&["synonyms"])).unwrap_err();
    assert!(matches!(err, CodecError::ConflictingSemantic { .. }));
}

#[test]
fn repeated_target_with_same_semantic_is_kept() {
    let entity = object(json!({
        "synonyms": [
            { "guid": "t1", "semantic": "APPEND" },
            { "guid": "t1", "semantic": "APPEND" },
        ],
    }));
    let buckets = categorize_relationships(&entity, &names(&["synonyms"])).unwrap();
    assert_eq!(
        buckets.append.map(Value::Object),
        Some(json!({ "synonyms": [{ "guid": "t1" }, { "guid": "t1" }] }))
    );
}

#[test]
fn scalar_relationship_value_is_invalid() {
    let entity = object(json!({ "readme": "r1" }));
    let err = categorize_relationships(&entity, &names(&["readme"])).unwrap_err();
    assert!(matches!(err, CodecError::InvalidRelationship { ref field, .. } if field == "readme"));
}

#[test]
fn scalar_collection_element_is_invalid() {
    let entity = object(json!({ "links": [{ "guid": "a" }, 7] }));
    let err = categorize_relationships(&entity, &names(&["links"])).unwrap_err();
    assert!(matches!(err, CodecError::InvalidRelationship { .. }));
}

// ── merge_relationships ──────────────────────────────────────────

#[test]
fn merge_prefers_replace_then_append_then_remove() {
    let replace = object(json!({ "a": [{ "guid": "r" }] }));
    let append = object(json!({ "a": [{ "guid": "x" }], "b": [{ "guid": "y" }] }));
    let remove = object(json!({ "b": [{ "guid": "z" }], "c": { "guid": "w" } }));

    let merged = merge_relationships(
        Some(&replace),
        Some(&append),
        Some(&remove),
        &names(&["a", "b", "c", "d"]),
    );

    assert_eq!(
        Value::Object(merged),
        json!({
            "a": [{ "guid": "r" }],
            "b": [{ "guid": "y", "semantic": "APPEND" }],
            "c": { "guid": "w", "semantic": "REMOVE" },
        })
    );
}

#[test]
fn merge_with_no_buckets_is_empty() {
    let merged = merge_relationships(None, None, None, &names(&["a"]));
    assert!(merged.is_empty());
}

#[test]
fn merge_keeps_replace_null() {
    let replace = object(json!({ "readme": null }));
    let merged = merge_relationships(Some(&replace), None, None, &names(&["readme"]));
    assert_eq!(Value::Object(merged), json!({ "readme": null }));
}

#[test]
fn merge_ignores_undeclared_fields() {
    let replace = object(json!({ "ghost": [{ "guid": "g" }] }));
    let merged = merge_relationships(Some(&replace), None, None, &names(&["links"]));
    assert!(merged.is_empty());
}

// ── Whole-entity conversion ──────────────────────────────────────

fn glossary_catalog() -> SchemaCatalog {
    let mut catalog = SchemaCatalog::new();
    catalog
        .register(TypeDef::new("Referenceable").attribute("qualifiedName"))
        .unwrap();
    catalog
        .register(
            TypeDef::new("Term")
                .extends("Referenceable")
                .attribute("name")
                .attribute("description")
                .relationship("anchor")
                .relationship("synonyms"),
        )
        .unwrap();
    catalog
}

#[test]
fn flat_entity_splits_into_nested_layout() {
    let catalog = glossary_catalog();
    let shape = catalog.resolve("Term").unwrap();
    let flat = object(json!({
        "typeName": "Term",
        "guid": "-1",
        "qualifiedName": "t@g",
        "name": "Customer",
        "description": null,
        "anchor": { "guid": "g1" },
        "synonyms": [{ "guid": "s1", "semantic": "APPEND" }],
    }));

    let nested = flat_to_nested(&flat, &shape).unwrap();
    assert_eq!(
        serde_json::to_value(&nested).unwrap(),
        json!({
            "typeName": "Term",
            "guid": "-1",
            "attributes": { "qualifiedName": "t@g", "name": "Customer", "description": null },
            "relationshipAttributes": { "anchor": { "guid": "g1" } },
            "appendRelationshipAttributes": { "synonyms": [{ "guid": "s1" }] },
        })
    );
}

#[test]
fn nested_entity_merges_back_to_flat() {
    let catalog = glossary_catalog();
    let shape = catalog.resolve("Term").unwrap();
    let nested = serde_json::from_value(json!({
        "typeName": "Term",
        "guid": "abc",
        "version": 3,
        "attributes": { "name": "Customer", "unknownAttr": true },
        "relationshipAttributes": { "anchor": { "guid": "g1" } },
        "removeRelationshipAttributes": { "synonyms": [{ "guid": "s1" }] },
        "classifications": [],
    }))
    .unwrap();

    let flat = nested_to_flat(&nested, &shape).unwrap();
    assert_eq!(
        Value::Object(flat),
        json!({
            "typeName": "Term",
            "guid": "abc",
            "version": 3,
            "name": "Customer",
            "anchor": { "guid": "g1" },
            "synonyms": [{ "guid": "s1", "semantic": "REMOVE" }],
        })
    );
}

#[test]
fn flat_kwargs_take_attributes_from_given_map() {
    let catalog = glossary_catalog();
    let shape = catalog.resolve("Term").unwrap();
    let nested = serde_json::from_value(json!({ "typeName": "Term", "guid": "abc" })).unwrap();
    let attributes = object(json!({ "name": "Override", "bogus": 1 }));
    let merged = object(json!({ "anchor": null }));

    let flat = build_flat_kwargs(&nested, &attributes, merged, &shape);
    assert_eq!(
        Value::Object(flat),
        json!({ "typeName": "Term", "guid": "abc", "name": "Override", "anchor": null })
    );
}

#[test]
fn wrong_type_name_is_rejected_both_ways() {
    let catalog = glossary_catalog();
    let shape = catalog.resolve("Term").unwrap();

    let flat = object(json!({ "typeName": "Referenceable" }));
    let err = flat_to_nested(&flat, &shape).unwrap_err();
    assert!(matches!(
        err,
        CodecError::TypeMismatch { ref expected, ref found } if expected == "Term" && found == "Referenceable"
    ));

    let nested = serde_json::from_value(json!({ "typeName": "Referenceable" })).unwrap();
    assert!(matches!(
        nested_to_flat(&nested, &shape).unwrap_err(),
        CodecError::TypeMismatch { .. }
    ));
}

#[test]
fn missing_type_name_defaults_to_shape() {
    let catalog = glossary_catalog();
    let shape = catalog.resolve("Term").unwrap();
    let nested = flat_to_nested(&object(json!({ "name": "x" })), &shape).unwrap();
    assert_eq!(nested.type_name, "Term");
}
