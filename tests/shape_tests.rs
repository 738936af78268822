//! Tests for the shape classifiers.

use fluentlist::ops::shape::{contains_objects, is_associative, is_multi_level};
use fluentlist::value::{Element, Object};
use rstest::rstest;
use serde_json::json;

fn element(value: serde_json::Value) -> Element {
    Element::from_json_value(value, true)
}

fn items(value: serde_json::Value) -> Vec<Element> {
    match Element::from_json_value(value, true) {
        Element::Sequence(items) => items,
        other => vec![other],
    }
}

// =============================================================================
// is_associative
// =============================================================================

#[rstest]
fn records_with_keys_are_associative() {
    assert!(is_associative(&element(json!({ "name": "Bobby" }))));
}

#[rstest]
fn empty_records_are_not_associative() {
    assert!(!is_associative(&element(json!({}))));
}

#[rstest]
fn objects_are_never_associative() {
    let object = Object::new().with_field("name", "Bobby");
    assert!(!is_associative(&Element::from(object)));
}

#[rstest]
fn scalars_and_sequences_are_not_associative() {
    assert!(!is_associative(&element(json!(1))));
    assert!(!is_associative(&element(json!([1, 2]))));
}

// =============================================================================
// is_multi_level
// =============================================================================

#[rstest]
fn nested_sequences_are_multi_level() {
    assert!(is_multi_level(&items(json!([[1, 2], 3]))));
}

#[rstest]
fn nested_records_are_multi_level() {
    assert!(is_multi_level(&items(json!([{ "name": "Bobby" }, [1, 2, 3]]))));
}

#[rstest]
fn flat_scalars_are_not_multi_level() {
    assert!(!is_multi_level(&items(json!([1, "two", 3.0, null]))));
}

#[rstest]
fn objects_alone_are_not_multi_level() {
    let object = Object::new().with_field("name", "Bobby");
    assert!(!is_multi_level(&[Element::from(object)]));
}

// =============================================================================
// contains_objects
// =============================================================================

#[rstest]
fn detects_top_level_objects() {
    let object = Object::new().with_field("name", "Bobby");
    assert!(contains_objects(&[Element::from(1), Element::from(object)]));
}

#[rstest]
fn records_are_not_objects() {
    assert!(!contains_objects(&items(json!([{ "name": "Bobby" }]))));
}
