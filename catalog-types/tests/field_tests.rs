use catalog_types::{Field, serialize_finite};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Record {
    #[serde(skip_serializing_if = "Field::is_absent")]
    display_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    row_count: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    owners: Field<Vec<String>>,
}

// ── Constructors and predicates ──────────────────────────────────

#[test]
fn default_is_absent() {
    let f: Field<i32> = Field::default();
    assert!(f.is_absent());
    assert!(!f.is_null());
    assert!(!f.is_value());
}

#[test]
fn from_value_is_present() {
    let f: Field<i32> = 7.into();
    assert_eq!(f, Field::Value(7));
    assert_eq!(f.value(), Some(&7));
}

#[test]
fn from_option_none_is_null_not_absent() {
    let f: Field<i32> = Field::from_option(None);
    assert!(f.is_null());
    assert_ne!(f, Field::Absent);
}

#[test]
fn from_option_some_is_value() {
    assert_eq!(Field::from_option(Some("x")), Field::Value("x"));
}

// ── Mutation ─────────────────────────────────────────────────────

#[test]
fn set_clear_unset_cycle() {
    let mut f: Field<String> = Field::Absent;
    f.set("a".into());
    assert_eq!(f.value().map(String::as_str), Some("a"));
    f.clear();
    assert!(f.is_null());
    f.unset();
    assert!(f.is_absent());
}

#[test]
fn value_mut_edits_in_place() {
    let mut f = Field::Value(vec![1]);
    if let Some(v) = f.value_mut() {
        v.push(2);
    }
    assert_eq!(f, Field::Value(vec![1, 2]));
}

#[test]
fn map_preserves_state() {
    assert_eq!(Field::<i32>::Absent.map(|v| v + 1), Field::Absent);
    assert_eq!(Field::<i32>::Null.map(|v| v + 1), Field::Null);
    assert_eq!(Field::Value(1).map(|v| v + 1), Field::Value(2));
}

#[test]
fn into_option_collapses_absent_and_null() {
    assert_eq!(Field::<i32>::Absent.into_option(), None);
    assert_eq!(Field::<i32>::Null.into_option(), None);
    assert_eq!(Field::Value(3).into_option(), Some(3));
}

#[test]
fn as_ref_borrows() {
    let f = Field::Value(String::from("x"));
    assert_eq!(f.as_ref(), Field::Value(&String::from("x")));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn absent_fields_have_no_key() {
    let json = serde_json::to_value(Record::default()).unwrap();
    assert_eq!(json, serde_json::json!({}));
}

#[test]
fn null_fields_are_written_as_null() {
    let r = Record {
        display_name: Field::Null,
        ..Default::default()
    };
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json, serde_json::json!({ "displayName": null }));
}

#[test]
fn null_and_absent_produce_different_output() {
    let absent = serde_json::to_string(&Record::default()).unwrap();
    let null = serde_json::to_string(&Record {
        row_count: Field::Null,
        ..Default::default()
    })
    .unwrap();
    assert_ne!(absent, null);
}

#[test]
fn deserialize_distinguishes_all_three_states() {
    let r: Record =
        serde_json::from_str(r#"{"displayName":null,"rowCount":12}"#).unwrap();
    assert_eq!(r.display_name, Field::Null);
    assert_eq!(r.row_count, Field::Value(12));
    assert_eq!(r.owners, Field::Absent);
}

#[test]
fn deserialize_rejects_wrong_type() {
    let result: Result<Record, _> = serde_json::from_str(r#"{"rowCount":"twelve"}"#);
    assert!(result.is_err());
}

fn field_strategy<T: std::fmt::Debug + Clone + 'static>(
    inner: impl Strategy<Value = T> + 'static,
) -> impl Strategy<Value = Field<T>> {
    prop_oneof![
        Just(Field::Absent),
        Just(Field::Null),
        inner.prop_map(Field::Value),
    ]
}

// ── Float fields ─────────────────────────────────────────────────

#[derive(Debug, Default, Serialize)]
struct Scored {
    #[serde(
        serialize_with = "serialize_finite",
        skip_serializing_if = "Field::is_absent"
    )]
    score: Field<f64>,
}

#[test]
fn finite_float_serializes_as_number() {
    let scored = Scored { score: Field::Value(0.5) };
    assert_eq!(serde_json::to_string(&scored).unwrap(), r#"{"score":0.5}"#);
}

#[test]
fn null_float_still_serializes_as_null() {
    let scored = Scored { score: Field::Null };
    assert_eq!(serde_json::to_string(&scored).unwrap(), r#"{"score":null}"#);
}

#[test]
fn non_finite_float_is_rejected_not_cleared() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let scored = Scored { score: Field::Value(value) };
        assert!(serde_json::to_value(&scored).is_err());
        assert!(serde_json::to_string(&scored).is_err());
    }
}

proptest! {
    #[test]
    fn serde_preserves_tri_state(
        display_name in field_strategy("[a-zA-Z ]{0,20}"),
        row_count in field_strategy(any::<i64>()),
        owners in field_strategy(prop::collection::vec("[a-z]{1,8}", 0..4)),
    ) {
        let record = Record { display_name, row_count, owners };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, record);
    }
}
