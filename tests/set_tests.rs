//! Tests for the set-style comparisons: difference and intersection.

use fluentlist::{Element, FluentList, ListError};
use rstest::rstest;
use serde_json::json;

fn element(value: serde_json::Value) -> Element {
    Element::from_json_value(value, true)
}

fn list(value: serde_json::Value) -> FluentList {
    FluentList::of(element(value))
}

// =============================================================================
// Difference
// =============================================================================

#[rstest]
fn difference_with_one_peer() {
    let result = list(json!([1, 2])).difference(&[element(json!([1, 3]))]).unwrap();
    assert_eq!(result.to_element(), element(json!([2])));
}

#[rstest]
fn difference_with_many_peers() {
    let result = list(json!([1, 2]))
        .difference(&[
            element(json!([1, 3])),
            element(json!([1, 4])),
            element(json!([1, 5])),
        ])
        .unwrap();
    assert_eq!(result.to_element(), element(json!([2])));
}

#[rstest]
fn difference_with_string_values() {
    let result = list(json!(["foo", "bar"]))
        .difference(&[element(json!(["foo", "baz"]))])
        .unwrap();
    assert_eq!(result.to_element(), element(json!(["bar"])));
}

#[rstest]
fn difference_deduplicates_in_first_seen_order() {
    let result = list(json!([2, 1, 2, 3]))
        .difference(&[element(json!([1]))])
        .unwrap();
    assert_eq!(result.to_element(), element(json!([2, 3])));
}

#[rstest]
fn difference_flattens_nested_input() {
    let result = list(json!([[1, 2], [3]]))
        .difference(&[element(json!([[1]]))])
        .unwrap();
    assert_eq!(result.to_element(), element(json!([2, 3])));
}

#[rstest]
fn difference_without_peers_is_an_error() {
    let error = list(json!(["foo", "bar"])).difference(&[]).unwrap_err();
    assert_eq!(
        error,
        ListError::MissingArgument {
            operation: "Difference"
        }
    );
    assert_eq!(
        error.to_string(),
        "Difference expects at least one array as an argument."
    );
}

#[rstest]
fn difference_rejects_non_sequence_peer() {
    let error = list(json!(["foo", "bar"]))
        .difference(&[Element::from("yolo")])
        .unwrap_err();
    assert_eq!(
        error,
        ListError::InvalidArgument {
            operation: "Difference"
        }
    );
}

// =============================================================================
// Intersection
// =============================================================================

#[rstest]
fn intersection_with_one_peer() {
    let result = list(json!([1, 2])).intersection(&[element(json!([1, 3]))]).unwrap();
    assert_eq!(result.to_element(), element(json!([1])));
}

#[rstest]
fn intersection_with_many_peers() {
    let result = list(json!([1, 2]))
        .intersection(&[
            element(json!([1, 3])),
            element(json!([1, 4])),
            element(json!([1, 5])),
        ])
        .unwrap();
    assert_eq!(result.to_element(), element(json!([1])));
}

#[rstest]
fn intersection_with_string_values() {
    let result = list(json!(["foo", "bar"]))
        .intersection(&[element(json!(["foo", "baz"]))])
        .unwrap();
    assert_eq!(result.to_element(), element(json!(["foo"])));
}

#[rstest]
fn intersection_requires_presence_in_every_peer() {
    let result = list(json!([1, 2]))
        .intersection(&[element(json!([1, 2])), element(json!([2]))])
        .unwrap();
    assert_eq!(result.to_element(), element(json!([2])));
}

#[rstest]
fn intersection_without_peers_is_an_error() {
    let error = list(json!(["foo", "bar"])).intersection(&[]).unwrap_err();
    assert_eq!(
        error,
        ListError::MissingArgument {
            operation: "Intersection"
        }
    );
    assert_eq!(
        error.to_string(),
        "Intersection expects at least one array as an argument."
    );
}

#[rstest]
fn intersection_rejects_non_sequence_peer() {
    let error = list(json!(["foo", "bar"]))
        .intersection(&[Element::from("yolo")])
        .unwrap_err();
    assert_eq!(
        error,
        ListError::InvalidArgument {
            operation: "Intersection"
        }
    );
}
