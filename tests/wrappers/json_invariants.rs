//! Structured-text encoding of Optional
//!
//! - Transparent on encode: bare payload or `null`
//! - Decode accepts the bare form first, the tagged form second

use crate::common::*;
use optionality::{Error, Optional};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Envelope {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    foo: String,
    my_optional: Optional<i32>,
}

#[test]
fn test_round_trip_some_whole() {
    init_tracing();
    let original = Optional::some(123);

    let j = serde_json::to_string(&original).unwrap();
    assert_eq!(j, "123");

    let restored: Optional<i32> = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_round_trip_none_whole() {
    let original = Optional::<i32>::none();

    let j = serde_json::to_string(&original).unwrap();
    assert_eq!(j, "null");

    let restored: Optional<i32> = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_round_trip_as_field() {
    let original = Envelope {
        foo: "bar".to_string(),
        my_optional: Optional::some(123),
    };

    let j = serde_json::to_string(&original).unwrap();
    assert_eq!(j, r#"{"foo":"bar","my_optional":123}"#);

    let restored: Envelope = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_round_trip_as_empty_field() {
    let original = Envelope::default();

    let j = serde_json::to_string(&original).unwrap();
    assert_eq!(j, r#"{"my_optional":null}"#);

    let restored: Envelope = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_missing_field_is_none() {
    let restored: Envelope = serde_json::from_str(r#"{"foo":"bar"}"#).unwrap();
    assert!(restored.my_optional.is_none());
}

#[test]
fn test_tagged_object_present() {
    init_tracing();
    let o: Optional<i32> =
        serde_json::from_value(json!({"wrapee": 123, "has_value": true})).unwrap();
    assert_eq!(o, Optional::some(123));
}

#[test]
fn test_tagged_object_absent() {
    let o: Optional<i32> =
        serde_json::from_value(json!({"wrapee": 123, "has_value": false})).unwrap();
    assert!(o.is_none());
    // Payload is ignored in comparisons
    assert_eq!(o, Optional::none());
}

#[test]
fn test_struct_payload_round_trip() {
    let original = Optional::some(Point { x: 3, y: 4 });
    let j = serde_json::to_value(&original).unwrap();
    assert_eq!(j, json!({"x": 3, "y": 4}));

    let restored: Optional<Point> = serde_json::from_value(j).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_undecodable_input_is_error() {
    let result = serde_json::from_str::<Optional<i32>>(r#"[1, 2]"#);
    assert!(result.is_err());

    let mut o = Optional::some(1);
    let err = o.unmarshal_json(br#"[1, 2]"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(o.is_none());
}

#[test]
fn test_tagged_fallback_only_takes_objects() {
    // Would fit the tagged fields positionally
    let result = serde_json::from_str::<Optional<i32>>("[5, true]");
    assert!(result.is_err());

    let mut o = Optional::some(1);
    let err = o.unmarshal_json(b"[5, true]").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(o.is_none());
}

#[test]
fn test_wide_integer_round_trip() {
    let original = Optional::some(u128::MAX);
    let j = serde_json::to_string(&original).unwrap();
    assert_eq!(j, u128::MAX.to_string());

    let restored: Optional<u128> = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, original);

    let mut o = Optional::<i128>::none();
    o.unmarshal_json(&Optional::some(i128::MIN).marshal_json().unwrap())
        .unwrap();
    assert_eq!(o, Optional::some(i128::MIN));
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Ledger {
    total: Optional<u128>,
}

#[test]
fn test_wide_integer_as_field() {
    let original = Ledger {
        total: Optional::some(1u128 << 100),
    };
    let j = serde_json::to_string(&original).unwrap();
    assert_eq!(j, r#"{"total":1267650600228229401496703205376}"#);

    let restored: Ledger = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_vec_of_optionals() {
    let values = vec![Optional::some(1), Optional::none(), Optional::some(3)];
    let j = serde_json::to_string(&values).unwrap();
    assert_eq!(j, "[1,null,3]");

    let restored: Vec<Optional<i32>> = serde_json::from_str(&j).unwrap();
    assert_eq!(restored, values);
}
