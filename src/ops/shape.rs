//! Shape classifiers driving the grouping and picking strategies.
//!
//! Pure functions over the tagged value model. They are evaluated freshly on
//! the current sequence state at every call; nothing is cached on the
//! container.

use crate::value::Element;

/// Returns `true` iff the element is a record with at least one key.
///
/// Objects are never associative under this predicate: their fields are
/// reached by declared name, not by dynamic key lookup.
#[must_use]
pub fn is_associative(element: &Element) -> bool {
    match element {
        Element::Record(fields) => !fields.is_empty(),
        Element::Scalar(_) | Element::Sequence(_) | Element::Object(_) => false,
    }
}

/// Returns `true` iff any top-level element is itself a nested container
/// (a sequence or a record).
#[must_use]
pub fn is_multi_level(items: &[Element]) -> bool {
    items
        .iter()
        .any(|element| matches!(element, Element::Sequence(_) | Element::Record(_)))
}

/// Returns `true` iff any top-level element is an object.
#[must_use]
pub fn contains_objects(items: &[Element]) -> bool {
    items
        .iter()
        .any(|element| matches!(element, Element::Object(_)))
}
