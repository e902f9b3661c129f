//! Store scan/produce contract of Optional
//!
//! - Storage null is absence in both directions
//! - Scan matches payload types exactly
//! - Non-primitive payloads bind as null (documented limitation)

use crate::common::*;
use optionality::{Error, Optional, StoreValue};

#[test]
fn test_scan_null_yields_none() {
    init_tracing();
    let mut output = Optional::<String>::none();
    output.scan(StoreValue::Null).unwrap();
    assert_eq!(output, Optional::none());
}

#[test]
fn test_scan_matching_value_yields_some() {
    let mut output = Optional::<String>::none();
    output.scan(StoreValue::Text("bar".into())).unwrap();
    assert_eq!(output, Optional::some("bar".to_string()));
}

#[test]
fn test_scan_mismatched_type_is_descriptive() {
    let mut output = Optional::<String>::none();
    let err = output.scan(StoreValue::Float(1.5)).unwrap_err();

    assert!(matches!(err, Error::ScanTypeMismatch { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Float"), "source type missing: {}", msg);
    assert!(msg.contains("String"), "target type missing: {}", msg);
}

#[test]
fn test_produce_then_scan_round_trip() {
    let input = Optional::some(b"blob".to_vec());
    let stored = input.produce().unwrap();

    let mut output = Optional::<Vec<u8>>::none();
    output.scan(stored).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_produce_none_then_scan() {
    let input = Optional::<i64>::none();
    let stored = input.produce().unwrap();
    assert!(stored.is_null());

    let mut output = Optional::some(9i64);
    output.scan(stored).unwrap();
    assert_eq!(input.is_some(), output.is_some());
}

// Documents current behavior: a present complex payload is stored as null.
#[test]
fn test_complex_payload_binds_as_null() {
    init_tracing();
    let input = Optional::some(Point { x: 1, y: 2 });
    assert_eq!(input.produce().unwrap(), StoreValue::Null);
}
