//! Iteration primitives and the flatten engine.
//!
//! Single-pass traversal primitives parameterized by a caller-supplied
//! function. The callback sees the element and its index only, never the
//! whole collection (except `reduce`, whose contract passes the full
//! sequence as the final callback argument). Callbacks run synchronously,
//! in index order.

use crate::value::{Element, Fields};

/// Produces a new sequence where element *i* is `callback(items[i], i)`.
///
/// Preserves length and order.
pub fn map<F>(items: &[Element], mut callback: F) -> Vec<Element>
where
    F: FnMut(&Element, usize) -> Element,
{
    items
        .iter()
        .enumerate()
        .map(|(index, element)| callback(element, index))
        .collect()
}

/// Keeps, in original order, the elements for which the predicate holds.
pub fn filter<F>(items: &[Element], mut predicate: F) -> Vec<Element>
where
    F: FnMut(&Element, usize) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|&(index, element)| predicate(element, index))
        .map(|(_, element)| element.clone())
        .collect()
}

/// Left fold over a sequence.
///
/// The callback receives `(accumulator, value, index, whole sequence)`.
///
/// When `initial` is `None` the accumulator starts at numeric zero (integer
/// `0`), **not** at the first element: a reduce over non-numeric data with no
/// explicit initial value starts the accumulator at `0`. This is a
/// deliberate, if unusual, default that callers may depend on.
///
/// # Examples
///
/// ```rust
/// use fluentlist::ops::iterate::reduce;
/// use fluentlist::value::Element;
///
/// let empty: Vec<Element> = Vec::new();
/// let folded = reduce(&empty, |accumulator, _, _, _| accumulator, None);
/// assert_eq!(folded, Element::from(0));
/// ```
pub fn reduce<F>(items: &[Element], mut callback: F, initial: Option<Element>) -> Element
where
    F: FnMut(Element, &Element, usize, &[Element]) -> Element,
{
    let mut accumulator = initial.unwrap_or_else(|| Element::from(0));
    for (index, element) in items.iter().enumerate() {
        accumulator = callback(accumulator, element, index, items);
    }
    accumulator
}

/// Side-effecting key/value traversal over keyed fields.
///
/// Builds no result; used by the picking and pulling strategies to copy
/// record keys and object fields.
pub fn each<'a, F>(fields: &'a Fields, mut callback: F)
where
    F: FnMut(&'a str, &'a Element),
{
    for (name, value) in fields {
        callback(name, value);
    }
}

/// Recursively merges nested sequences into a single sequence.
///
/// A `depth` of `0` means unlimited: the result contains no sequence
/// elements at all. A `depth` of `N > 0` merges exactly N nesting levels,
/// leaving anything nested deeper intact. Elements that are not sequences
/// (scalars, records, objects) pass through unchanged at any depth.
///
/// # Examples
///
/// ```rust
/// use fluentlist::ops::iterate::flatten;
/// use fluentlist::value::Element;
///
/// let rows = vec![Element::from(vec![Element::from(vec![Element::from(1)])])];
/// assert_eq!(
///     flatten(&rows, 1),
///     vec![Element::from(vec![Element::from(1)])]
/// );
/// assert_eq!(flatten(&rows, 0), vec![Element::from(1)]);
/// ```
#[must_use]
pub fn flatten(items: &[Element], depth: usize) -> Vec<Element> {
    let mut merged = Vec::with_capacity(items.len());
    for element in items {
        match element {
            // depth 1 merges one level without recursing further
            Element::Sequence(inner) if depth == 1 => merged.extend(inner.iter().cloned()),
            Element::Sequence(inner) => merged.extend(flatten(inner, depth.saturating_sub(1))),
            other => merged.push(other.clone()),
        }
    }
    merged
}

/// Fully flattens, then maps.
///
/// The flatten depth is not configurable here: `flat_map` always reduces its
/// input to scalars (and records/objects) before applying the callback.
pub fn flat_map<F>(items: &[Element], callback: F) -> Vec<Element>
where
    F: FnMut(&Element, usize) -> Element,
{
    map(&flatten(items, 0), callback)
}
