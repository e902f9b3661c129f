//! Text marshaling of Optional and its rendering

use crate::common::*;
use optionality::{Error, Optional, EMPTY_OPTIONAL};

#[test]
fn test_to_string_has_value() {
    assert_eq!(Optional::some(123).to_string(), "123");
    assert_eq!(format!("{}", Optional::some("abc")), "abc");
}

#[test]
fn test_to_string_has_no_value() {
    assert_eq!(Optional::<i32>::none().to_string(), EMPTY_OPTIONAL);
    assert_eq!(Optional::<i32>::none().to_string(), "empty optional");
}

#[test]
fn test_text_round_trip() {
    let input = Optional::some(-17i32);
    let text = input.marshal_text().unwrap();

    let mut output = Optional::<i32>::none();
    output.unmarshal_text(&text).unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_text_round_trip_absent() {
    let input = Optional::<f64>::none();
    let text = input.marshal_text().unwrap();
    assert!(text.is_empty());

    let mut output = Optional::some(1.0f64);
    output.unmarshal_text(&text).unwrap();
    assert!(output.is_none());
}

#[test]
fn test_incapable_payload_fails_both_ways() {
    init_tracing();
    let err = Optional::some(Point::default()).marshal_text().unwrap_err();
    assert!(matches!(err, Error::TextMarshalUnsupported { .. }));
    assert!(err.to_string().contains("Point"));

    let mut output = Optional::<Point>::none();
    let err = output.unmarshal_text(b"1,2").unwrap_err();
    assert!(matches!(err, Error::TextUnmarshalUnsupported { .. }));
    assert!(err.to_string().contains("Point"));
}
