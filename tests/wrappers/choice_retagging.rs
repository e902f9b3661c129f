//! Choice fallback combinators: verify the tag, not just the payload

use optionality::Choice;

type Pick = Choice<u32, &'static str>;

#[test]
fn test_get_either_else_or_retags_or() {
    let c = Pick::or("first").get_either_else_or("second");
    assert!(c.is_or());
    assert_eq!(c, Choice::Or("second"));
}

#[test]
fn test_get_either_else_default_keeps_either_tag() {
    let c = Pick::or("first").get_either_else_default();
    assert!(c.is_either());
    assert_eq!(c, Choice::Either(0));
}

#[test]
fn test_get_either_else_from_keeps_either_tag() {
    let c = Pick::or("first").get_either_else_from(|| 5);
    assert!(c.is_either());
    assert_eq!(c.must_get_either(), 5);
}

#[test]
fn test_get_or_family_mirrors() {
    assert_eq!(Pick::either(1).get_or_else_either(2), Choice::Either(2));
    assert_eq!(Pick::either(1).get_or_else_default(), Choice::Or(""));
    assert_eq!(Pick::either(1).get_or_else_from(|| "made"), Choice::Or("made"));
}

#[test]
fn test_combinators_do_not_mutate_source() {
    let source = Pick::or("kept");
    let _ = source.get_either_else_default();
    assert_eq!(source, Choice::Or("kept"));
}
