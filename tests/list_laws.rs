//! Property-based tests for the transformation laws.
//!
//! These verify the algebraic properties the engine promises: slicing
//! identities, flatten idempotence, the zip/unzip round trip, chunk
//! re-concatenation, and compact's truthiness guarantee.

use fluentlist::{Element, FluentList};
use proptest::prelude::*;

fn int_element() -> impl Strategy<Value = Element> {
    any::<i64>().prop_map(|number| Element::from(number))
}

fn int_elements(max: usize) -> impl Strategy<Value = Vec<Element>> {
    prop::collection::vec(int_element(), 0..max)
}

fn arb_element() -> impl Strategy<Value = Element> {
    let leaf = prop_oneof![
        Just(Element::null()),
        any::<bool>().prop_map(|value| Element::from(value)),
        int_element(),
        "[a-z]{0,6}".prop_map(|text| Element::from(text)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Element::Sequence)
    })
}

fn parallel_rows() -> impl Strategy<Value = (Vec<Element>, Vec<Element>)> {
    (1usize..8).prop_flat_map(|length| {
        (
            prop::collection::vec(int_element(), length),
            prop::collection::vec(int_element(), length),
        )
    })
}

// =============================================================================
// Drop Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_drop_shrinks_length(elements in int_elements(20), size in 0usize..30) {
        let list = FluentList::from_items(elements.clone());
        let bounded = size.min(elements.len());
        let dropped = list.drop(bounded);

        prop_assert_eq!(dropped.len(), elements.len() - bounded);
        prop_assert_eq!(dropped.to_vec(), elements[bounded..].to_vec());
    }
}

proptest! {
    #[test]
    fn prop_drop_right_keeps_the_prefix(elements in int_elements(20), size in 0usize..30) {
        let list = FluentList::from_items(elements.clone());
        let bounded = size.min(elements.len());
        let kept = list.drop_right(elements.len() - bounded);

        prop_assert_eq!(kept.to_vec(), elements[..bounded].to_vec());
    }
}

proptest! {
    #[test]
    fn prop_oversized_drop_is_identity(elements in int_elements(20), excess in 1usize..10) {
        let list = FluentList::from_items(elements.clone());
        let size = elements.len() + excess;

        prop_assert_eq!(list.drop(size).to_vec(), elements.clone());
        prop_assert_eq!(list.drop_right(size).to_vec(), elements);
    }
}

// =============================================================================
// Flatten Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_unlimited_flatten_is_idempotent(elements in prop::collection::vec(arb_element(), 0..8)) {
        let once = FluentList::from_items(elements).flatten(0);
        let twice = once.flatten(0);

        prop_assert_eq!(once.to_vec(), twice.to_vec());
    }
}

proptest! {
    #[test]
    fn prop_flatten_output_has_no_sequences(elements in prop::collection::vec(arb_element(), 0..8)) {
        let flattened = FluentList::from_items(elements).flatten(0);

        prop_assert!(flattened.to_vec().iter().all(|element| !element.is_sequence()));
    }
}

// =============================================================================
// Zip / Unzip Round Trip
// =============================================================================

proptest! {
    #[test]
    fn prop_zip_then_unzip_round_trips(rows in parallel_rows()) {
        let (first, second) = rows;
        let zipped = FluentList::from_items(first.clone()).zip(&[second.clone()]).unwrap();
        let unzipped = zipped.unzip().unwrap();

        prop_assert_eq!(
            unzipped.to_vec(),
            vec![Element::Sequence(first), Element::Sequence(second)]
        );
    }
}

// =============================================================================
// Chunk Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_chunks_reconcatenate(elements in int_elements(20), size in 1usize..6) {
        let rejoined = FluentList::from_items(elements.clone()).chunk(size).flatten(1);

        prop_assert_eq!(rejoined.to_vec(), elements);
    }
}

// =============================================================================
// Compact / Map Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compact_output_is_truthy(elements in prop::collection::vec(arb_element(), 0..12)) {
        let compacted = FluentList::from_items(elements).compact();

        prop_assert!(compacted.to_vec().iter().all(Element::is_truthy));
    }
}

proptest! {
    #[test]
    fn prop_map_preserves_length(elements in prop::collection::vec(arb_element(), 0..12)) {
        let list = FluentList::from_items(elements.clone());
        let mapped = list.map(|element, _| element.clone());

        prop_assert_eq!(mapped.len(), elements.len());
        prop_assert_eq!(mapped.to_vec(), elements);
    }
}
