//! Tests for the zip family: transpose, inverse transpose, and the
//! combine variant.

use fluentlist::{Element, FluentList, ListError, Scalar};
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

fn list(value: serde_json::Value) -> FluentList {
    FluentList::of(element(value))
}

fn tuple_sum(tuple: &[Element]) -> Element {
    tuple.iter().fold(Element::from(0), |accumulator, element| {
        match (accumulator, element) {
            (Element::Scalar(Scalar::Int(total)), Element::Scalar(Scalar::Int(next))) => {
                Element::from(total + next)
            }
            (accumulator, _) => accumulator,
        }
    })
}

// =============================================================================
// Zip
// =============================================================================

#[rstest]
fn zip_transposes_parallel_sequences() {
    let zipped = list(json!(["yolo", "bolo"]))
        .zip(&[items(json!([1, 2])), items(json!(["a", "b"]))])
        .unwrap();
    assert_eq!(
        zipped.to_element(),
        element(json!([["yolo", 1, "a"], ["bolo", 2, "b"]]))
    );
}

#[rstest]
fn zip_without_peers_is_an_error() {
    let error = list(json!(["yolo", "bolo"])).zip(&[]).unwrap_err();
    assert_eq!(error, ListError::MissingArgument { operation: "Zip" });
    assert_eq!(
        error.to_string(),
        "Zip expects at least one array as an argument."
    );
}

#[rstest]
fn zip_with_unequal_lengths_uses_index_bounded_access() {
    let zipped = list(json!([1, 2, 3])).zip(&[items(json!(["a"]))]).unwrap();
    assert_eq!(
        zipped.to_element(),
        element(json!([[1, "a"], [2], [3]]))
    );
}

// =============================================================================
// Unzip
// =============================================================================

#[rstest]
fn unzip_gathers_columns() {
    let unzipped = list(json!([["yolo", 1, "a"], ["bolo", 2, "b"]]))
        .unzip()
        .unwrap();
    assert_eq!(
        unzipped.to_element(),
        element(json!([["yolo", "bolo"], [1, 2], ["a", "b"]]))
    );
}

#[rstest]
fn unzip_inverts_zip_for_rectangular_input() {
    let zipped = list(json!(["a", "b", "c"]))
        .zip(&[items(json!([1, 2, 3]))])
        .unwrap();
    assert_eq!(
        zipped.unzip().unwrap().to_element(),
        element(json!([["a", "b", "c"], [1, 2, 3]]))
    );
}

#[rstest]
fn unzip_on_flat_sequence_is_an_error() {
    let error = list(json!(["yolo", "bolo"])).unzip().unwrap_err();
    assert_eq!(error, ListError::InvalidShape);
    assert_eq!(
        error.to_string(),
        "Unzip can only be called on a multidimensional array."
    );
}

#[rstest]
fn unzip_on_empty_sequence_is_an_error() {
    assert_eq!(
        list(json!([])).unzip().unwrap_err(),
        ListError::InvalidShape
    );
}

// =============================================================================
// ZipWith
// =============================================================================

#[rstest]
fn zip_with_combines_each_tuple() {
    let combined = list(json!([1, 2]))
        .zip_with(tuple_sum, &[items(json!([10, 20])), items(json!([100, 200]))])
        .unwrap();
    assert_eq!(combined.to_element(), element(json!([111, 222])));
}

#[rstest]
fn zip_with_without_peers_is_an_error() {
    let error = list(json!([1, 2])).zip_with(tuple_sum, &[]).unwrap_err();
    assert_eq!(error, ListError::MissingArgument { operation: "ZipWith" });
}
