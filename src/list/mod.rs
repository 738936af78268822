//! The public sequence wrapper and its fluent transformation chain.
//!
//! [`FluentList`] owns exactly one payload, list-shaped or record-shaped,
//! normalized from whatever the caller constructed it with. Every
//! transformation takes `&self` and returns a **new** instance: the design is
//! copy-on-write value semantics, so successive chain calls never share
//! mutable state.
//!
//! # Examples
//!
//! ```rust
//! use fluentlist::prelude::*;
//!
//! let evens = fluent("[1, 2, 3, 4]")
//!     .filter(|element, _| matches!(element, Element::Scalar(Scalar::Int(n)) if n % 2 == 0));
//! assert_eq!(evens.to_json(), "[2,4]");
//!
//! // The original is untouched by the chain.
//! let numbers = fluent("[1, 2, 3, 4]");
//! let _ = numbers.drop(2);
//! assert_eq!(numbers.len(), 4);
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::{ListError, Result};
use crate::ops::{group, iterate, shape, zip};
use crate::value::{Element, Fields, Object, Scalar};

// =============================================================================
// Payload
// =============================================================================

/// Backing storage for a [`FluentList`].
///
/// Record-shaped payloads arise from record construction and from `group_by`
/// output; they keep their keyed form so `get`, the flat branch of `pick`,
/// and serialization can see it. Every other transformation produces a
/// list-shaped payload.
#[derive(Clone, Debug, PartialEq)]
enum Payload {
    Sequence(Vec<Element>),
    Record(Fields),
}

// =============================================================================
// FluentList
// =============================================================================

/// An immutable fluent wrapper around a heterogeneous sequence.
///
/// # Examples
///
/// ```rust
/// use fluentlist::FluentList;
///
/// let list = FluentList::of("[2, 4, 3]");
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.sum(), fluentlist::Element::from(9));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FluentList {
    payload: Payload,
}

impl FluentList {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            payload: Payload::Sequence(Vec::new()),
        }
    }

    /// Wraps an already-built sequence as-is, without normalization.
    #[must_use]
    pub const fn from_items(items: Vec<Element>) -> Self {
        Self {
            payload: Payload::Sequence(items),
        }
    }

    /// Creates a list from any value, normalizing it into a payload.
    ///
    /// - a sequence is adopted as-is
    /// - a record keeps its keyed shape
    /// - an object becomes a one-element sequence
    /// - a string is sniffed as JSON: on success the decoded value is
    ///   normalized (decoded JSON objects stay object-typed), on failure the
    ///   string is wrapped as a one-element sequence
    /// - any other scalar is wrapped as a one-element sequence
    /// - another wrapper's payload is adopted (via [`Element::from`])
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentlist::FluentList;
    ///
    /// let decoded = FluentList::of(r#"[{"name":"Bobby"},{"name":"Lucy"}]"#);
    /// assert_eq!(decoded.len(), 2);
    ///
    /// let plain = FluentList::of("not json");
    /// assert_eq!(plain.to_json(), r#"["not json"]"#);
    /// ```
    #[must_use]
    pub fn of(value: impl Into<Element>) -> Self {
        Self {
            payload: normalize(value.into(), false, true),
        }
    }

    /// Like [`FluentList::of`], with the records flag set: decoded JSON
    /// objects become records, and an object input is field-flattened into a
    /// record-shaped payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentlist::{Element, FluentList, Object};
    ///
    /// let person = Object::new().with_field("name", "Bobby").with_field("age", 28);
    /// let list = FluentList::of_records(person);
    /// assert_eq!(list.get("name", None), Element::from("Bobby"));
    /// ```
    #[must_use]
    pub fn of_records(value: impl Into<Element>) -> Self {
        Self {
            payload: normalize(value.into(), true, true),
        }
    }

    // =========================================================================
    // Readers
    // =========================================================================

    /// Number of elements (or keys, for a record-shaped payload).
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::Sequence(items) => items.len(),
            Payload::Record(fields) => fields.len(),
        }
    }

    /// Returns `true` if the list holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sequential view of the payload: elements in order, or a record's
    /// values in key order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Element> {
        self.view().into_owned()
    }

    /// The payload as a tagged value: a sequence, or a record for
    /// record-shaped payloads.
    #[must_use]
    pub fn to_element(&self) -> Element {
        match &self.payload {
            Payload::Sequence(items) => Element::Sequence(items.clone()),
            Payload::Record(fields) => Element::Record(fields.clone()),
        }
    }

    /// Compact JSON encoding of the payload, no pretty-printing.
    ///
    /// A list-shaped payload encodes as a JSON array, a record-shaped one as
    /// a JSON object.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_element().to_json_value().to_string()
    }

    /// First element, or the default, or the empty-sequence sentinel.
    ///
    /// On an empty payload this returns `default` when given and an empty
    /// sequence element otherwise.
    #[must_use]
    pub fn first(&self, default: Option<Element>) -> Element {
        self.view()
            .first()
            .cloned()
            .unwrap_or_else(|| default.unwrap_or_else(empty_sequence))
    }

    /// First element matching the predicate, with the same default and
    /// sentinel policy as [`FluentList::first`].
    #[must_use]
    pub fn first_where<F>(&self, predicate: F, default: Option<Element>) -> Element
    where
        F: FnMut(&Element, usize) -> bool,
    {
        if self.is_empty() {
            return default.unwrap_or_else(empty_sequence);
        }
        iterate::filter(&self.view(), predicate)
            .into_iter()
            .next()
            .unwrap_or_else(|| default.unwrap_or_else(empty_sequence))
    }

    /// Whether any element equals `search`.
    ///
    /// Returns `Bool(true)` on a match; otherwise the default when given,
    /// else `Bool(false)`. The mixed return is part of the contract: a miss
    /// with a default yields the default itself, not a boolean.
    #[must_use]
    pub fn contains(&self, search: &Element, default: Option<Element>) -> Element {
        self.contains_where(|element, _| element == search, default)
    }

    /// Predicate form of [`FluentList::contains`].
    #[must_use]
    pub fn contains_where<F>(&self, predicate: F, default: Option<Element>) -> Element
    where
        F: FnMut(&Element, usize) -> bool,
    {
        if iterate::filter(&self.view(), predicate).is_empty() {
            default.unwrap_or_else(|| Element::from(false))
        } else {
            Element::from(true)
        }
    }

    /// Direct key lookup against a record-shaped payload.
    ///
    /// Returns the default (or null) when the key is absent or the payload
    /// is list-shaped.
    #[must_use]
    pub fn get(&self, key: &str, default: Option<Element>) -> Element {
        let found = match &self.payload {
            Payload::Record(fields) => fields.get(key).cloned(),
            Payload::Sequence(_) => None,
        };
        found.or(default).unwrap_or_else(Element::null)
    }

    /// Numeric fold via the reduce primitive with initial `0`.
    ///
    /// Integer sums stay integers; any float promotes the total to a float.
    /// Non-numeric elements contribute nothing.
    #[must_use]
    pub fn sum(&self) -> Element {
        iterate::reduce(
            &self.view(),
            |accumulator, element, _, _| numeric_add(accumulator, element),
            Some(Element::from(0)),
        )
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Maps every element through the callback. Preserves length and order.
    #[must_use]
    pub fn map<F>(&self, callback: F) -> Self
    where
        F: FnMut(&Element, usize) -> Element,
    {
        Self::from_items(iterate::map(&self.view(), callback))
    }

    /// Keeps, in order, the elements for which the predicate holds.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&Element, usize) -> bool,
    {
        Self::from_items(iterate::filter(&self.view(), predicate))
    }

    /// Left fold; see [`iterate::reduce`] for the numeric-zero default that
    /// applies when `initial` is `None`.
    #[must_use]
    pub fn reduce<F>(&self, callback: F, initial: Option<Element>) -> Element
    where
        F: FnMut(Element, &Element, usize, &[Element]) -> Element,
    {
        iterate::reduce(&self.view(), callback, initial)
    }

    /// Merges nested sequences; `depth` `0` flattens without limit, `N > 0`
    /// merges exactly N nesting levels.
    #[must_use]
    pub fn flatten(&self, depth: usize) -> Self {
        Self::from_items(iterate::flatten(&self.view(), depth))
    }

    /// Fully flattens, then maps.
    #[must_use]
    pub fn flat_map<F>(&self, callback: F) -> Self
    where
        F: FnMut(&Element, usize) -> Element,
    {
        Self::from_items(iterate::flat_map(&self.view(), callback))
    }

    // =========================================================================
    // Slicing
    // =========================================================================

    /// Slices off `size` elements from the start. A `size` greater than the
    /// length returns the sequence unchanged: identity, not empty.
    #[must_use]
    pub fn drop(&self, size: usize) -> Self {
        let view = self.view();
        if size <= view.len() {
            Self::from_items(view[size..].to_vec())
        } else {
            Self::from_items(view.into_owned())
        }
    }

    /// Slices off `size` elements from the end, with the same
    /// identity-when-too-big policy as [`FluentList::drop`].
    #[must_use]
    pub fn drop_right(&self, size: usize) -> Self {
        let view = self.view();
        if size <= view.len() {
            Self::from_items(view[..view.len() - size].to_vec())
        } else {
            Self::from_items(view.into_owned())
        }
    }

    /// Drops the prefix of elements for which the predicate holds.
    ///
    /// Maps every element to a boolean, finds the first `false`, and drops
    /// up to that index; when no element fails, nothing is dropped.
    #[must_use]
    pub fn drop_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Element, usize) -> bool,
    {
        let view = self.view();
        let outcomes: Vec<bool> = view
            .iter()
            .enumerate()
            .map(|(index, element)| predicate(element, index))
            .collect();
        let position = outcomes.iter().position(|passed| !passed).unwrap_or(0);
        self.drop(position)
    }

    /// Drops the suffix of elements for which the predicate holds.
    ///
    /// The cut point is the first failing index plus one, or zero when the
    /// first element already fails, or when no element fails.
    #[must_use]
    pub fn drop_right_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Element, usize) -> bool,
    {
        let view = self.view();
        let outcomes: Vec<bool> = view
            .iter()
            .enumerate()
            .map(|(index, element)| predicate(element, index))
            .collect();
        let cut = match outcomes.iter().position(|passed| !passed) {
            Some(0) | None => 0,
            Some(index) => index + 1,
        };
        self.drop_right(cut)
    }

    // =========================================================================
    // Reshaping
    // =========================================================================

    /// Concatenates `items` onto the end. Order preserved, duplicates
    /// retained.
    #[must_use]
    pub fn merge(&self, items: Vec<Element>) -> Self {
        let mut merged = self.to_vec();
        merged.extend(items);
        Self::from_items(merged)
    }

    /// Maps each element to its `key` (records) or field (objects) value.
    ///
    /// Elements lacking the key map to the default, or null.
    #[must_use]
    pub fn pluck(&self, key: &str, default: Option<Element>) -> Self {
        let missing = default.unwrap_or_else(Element::null);
        Self::from_items(iterate::map(&self.view(), |element, _| {
            let found = match element {
                Element::Record(fields) => fields.get(key).cloned(),
                Element::Object(object) => object.field(key).cloned(),
                Element::Scalar(_) | Element::Sequence(_) => None,
            };
            found.unwrap_or_else(|| missing.clone())
        }))
    }

    /// Selects the requested keys.
    ///
    /// On a flat base (not multi-level, no objects) this selects the
    /// subset of `keys` present in the wrapper's own record-shaped content,
    /// as a plain value sequence in requested-key order. Otherwise each
    /// element is reduced to a record/object holding only the requested
    /// keys/fields.
    #[must_use]
    pub fn pick(&self, keys: &[&str]) -> Self {
        let view = self.view();
        if !shape::is_multi_level(&view) && !shape::contains_objects(&view) {
            let mut picked = Vec::new();
            if shape::is_associative(&self.to_element()) {
                if let Payload::Record(fields) = &self.payload {
                    for key in keys {
                        if let Some(value) = fields.get(*key) {
                            picked.push(value.clone());
                        }
                    }
                }
            }
            return Self::from_items(picked);
        }
        Self::from_items(iterate::map(&view, |element, _| {
            reduce_to_keys(element, keys)
        }))
    }

    /// Groups consecutive elements into sub-sequences of length `size`.
    ///
    /// The final chunk may be shorter. A `size` of `0` is a no-op returning
    /// the payload unchanged, not an error and not an infinite loop.
    #[must_use]
    pub fn chunk(&self, size: usize) -> Self {
        if size == 0 {
            return self.clone();
        }
        Self::from_items(
            self.view()
                .chunks(size)
                .map(|chunk| Element::Sequence(chunk.to_vec()))
                .collect(),
        )
    }

    /// Removes falsy elements (null, `false`, numeric zero, the empty
    /// string) and reindexes the remainder contiguously.
    #[must_use]
    pub fn compact(&self) -> Self {
        Self::from_items(iterate::filter(&self.view(), |element, _| {
            element.is_truthy()
        }))
    }

    // =========================================================================
    // Zip Family
    // =========================================================================

    /// Transposes this sequence with at least one peer sequence into tuples.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MissingArgument`] when `others` is empty.
    pub fn zip(&self, others: &[Vec<Element>]) -> Result<Self> {
        Ok(Self::from_items(zip::zip(&self.view(), others)?))
    }

    /// Transposes like [`FluentList::zip`], then combines each tuple with
    /// the callback; the combiner receives the tuple as a slice.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MissingArgument`] when `others` is empty.
    pub fn zip_with<F>(&self, combiner: F, others: &[Vec<Element>]) -> Result<Self>
    where
        F: FnMut(&[Element]) -> Element,
    {
        Ok(Self::from_items(zip::zip_with(
            &self.view(),
            combiner,
            others,
        )?))
    }

    /// The inverse transpose: gathers the *i*-th element of every row.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidShape`] unless every element is itself a
    /// sequence (and the payload is non-empty).
    pub fn unzip(&self) -> Result<Self> {
        Ok(Self::from_items(zip::unzip(&self.view())?))
    }

    // =========================================================================
    // Grouping & Set Comparison
    // =========================================================================

    /// Buckets elements by a derived key into a record-shaped payload; see
    /// [`group::group_by`] for the per-element strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MissingKey`] / [`ListError::MissingField`] when
    /// the keyed lookup fails against a record or object element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluentlist::prelude::*;
    ///
    /// let grouped = fluent("[4.2, 6.1, 6.4]")
    ///     .group_by(
    ///         |value| match value.as_scalar() {
    ///             Some(Scalar::Float(number)) => Element::from(number.floor()),
    ///             _ => value.clone(),
    ///         },
    ///         None,
    ///     )
    ///     .unwrap();
    /// assert_eq!(grouped.to_json(), r#"{"4":[4.2],"6":[6.1,6.4]}"#);
    /// ```
    pub fn group_by<F>(&self, iterator: F, key: Option<&str>) -> Result<Self>
    where
        F: FnMut(&Element) -> Element,
    {
        let associative = shape::is_associative(&self.to_element());
        Ok(Self {
            payload: Payload::Record(group::group_by(&self.view(), iterator, key, associative)?),
        })
    }

    /// Elements of this sequence absent from every peer sequence, fully
    /// flattened, deduplicated in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MissingArgument`] when `others` is empty and
    /// [`ListError::InvalidArgument`] when a peer is not a sequence.
    pub fn difference(&self, others: &[Element]) -> Result<Self> {
        let peers = peer_sequences("Difference", others)?;
        let mut kept = Vec::new();
        for element in iterate::flatten(&self.view(), 0) {
            if peers.iter().any(|peer| peer.contains(&element)) {
                continue;
            }
            if !kept.contains(&element) {
                kept.push(element);
            }
        }
        Ok(Self::from_items(kept))
    }

    /// Elements of this sequence present in every peer sequence, fully
    /// flattened, deduplicated in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MissingArgument`] when `others` is empty and
    /// [`ListError::InvalidArgument`] when a peer is not a sequence.
    pub fn intersection(&self, others: &[Element]) -> Result<Self> {
        let peers = peer_sequences("Intersection", others)?;
        let mut kept = Vec::new();
        for element in iterate::flatten(&self.view(), 0) {
            if peers.iter().all(|peer| peer.contains(&element)) && !kept.contains(&element) {
                kept.push(element);
            }
        }
        Ok(Self::from_items(kept))
    }

    /// Removes the given values: matching scalars are dropped, records lose
    /// matching keys, objects lose matching fields. The result is
    /// reindexed; `false` scalars do not survive the final pass.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidArgument`] unless `values` is a sequence.
    pub fn pull(&self, values: &Element) -> Result<Self> {
        let Element::Sequence(values) = values else {
            return Err(ListError::InvalidArgument { operation: "Pull" });
        };
        let marked = iterate::map(&self.view(), |element, _| strip_matches(element, values));
        Ok(Self::from_items(iterate::filter(&marked, |element, _| {
            !matches!(element, Element::Scalar(Scalar::Bool(false)))
        })))
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn view(&self) -> Cow<'_, [Element]> {
        match &self.payload {
            Payload::Sequence(items) => Cow::Borrowed(items.as_slice()),
            Payload::Record(fields) => Cow::Owned(fields.values().cloned().collect()),
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn empty_sequence() -> Element {
    Element::Sequence(Vec::new())
}

fn normalize(element: Element, records: bool, sniff_json: bool) -> Payload {
    match element {
        Element::Sequence(items) => Payload::Sequence(items),
        Element::Record(fields) => Payload::Record(fields),
        Element::Object(object) => {
            if records {
                Payload::Record(object.into_fields())
            } else {
                Payload::Sequence(vec![Element::Object(object)])
            }
        }
        Element::Scalar(Scalar::String(text)) if sniff_json => {
            match serde_json::from_str::<Value>(&text) {
                // decoded exactly once: strings inside the decoded value are
                // not sniffed again
                Ok(decoded) => normalize(Element::from_json_value(decoded, records), records, false),
                Err(_) => Payload::Sequence(vec![Element::from(text)]),
            }
        }
        scalar => Payload::Sequence(vec![scalar]),
    }
}

#[allow(clippy::cast_precision_loss)]
fn numeric_add(accumulator: Element, element: &Element) -> Element {
    match (accumulator, element) {
        (Element::Scalar(Scalar::Int(total)), Element::Scalar(Scalar::Int(next))) => {
            Element::from(total + next)
        }
        (Element::Scalar(Scalar::Int(total)), Element::Scalar(Scalar::Float(next))) => {
            Element::from(total as f64 + next)
        }
        (Element::Scalar(Scalar::Float(total)), Element::Scalar(Scalar::Int(next))) => {
            Element::from(total + *next as f64)
        }
        (Element::Scalar(Scalar::Float(total)), Element::Scalar(Scalar::Float(next))) => {
            Element::from(total + next)
        }
        (accumulator, _) => accumulator,
    }
}

fn reduce_to_keys(element: &Element, keys: &[&str]) -> Element {
    match element {
        Element::Record(fields) => {
            let mut kept = Fields::new();
            iterate::each(fields, |name, value| {
                if keys.contains(&name) {
                    kept.insert(name.to_string(), value.clone());
                }
            });
            Element::Record(kept)
        }
        Element::Object(object) => {
            let mut kept = Fields::new();
            iterate::each(object.fields(), |name, value| {
                if keys.contains(&name) {
                    kept.insert(name.to_string(), value.clone());
                }
            });
            Element::Object(Object::from_fields(kept))
        }
        other => other.clone(),
    }
}

fn strip_matches(element: &Element, values: &[Element]) -> Element {
    match element {
        Element::Record(fields) => {
            let mut kept = Fields::new();
            iterate::each(fields, |name, value| {
                if !matches_name(values, name) {
                    kept.insert(name.to_string(), value.clone());
                }
            });
            Element::Record(kept)
        }
        Element::Object(object) => {
            let mut kept = Fields::new();
            iterate::each(object.fields(), |name, value| {
                if !matches_name(values, name) {
                    kept.insert(name.to_string(), value.clone());
                }
            });
            Element::Object(Object::from_fields(kept))
        }
        matched if values.contains(matched) => Element::from(false),
        other => other.clone(),
    }
}

fn matches_name(values: &[Element], name: &str) -> bool {
    values
        .iter()
        .any(|value| matches!(value, Element::Scalar(Scalar::String(text)) if text == name))
}

fn peer_sequences(operation: &'static str, others: &[Element]) -> Result<Vec<Vec<Element>>> {
    if others.is_empty() {
        return Err(ListError::MissingArgument { operation });
    }
    let mut peers = Vec::with_capacity(others.len());
    for other in others {
        match other {
            Element::Sequence(items) => peers.push(iterate::flatten(items, 0)),
            _ => return Err(ListError::InvalidArgument { operation }),
        }
    }
    Ok(peers)
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl Default for FluentList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FluentList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_json())
    }
}

impl From<Vec<Element>> for FluentList {
    fn from(items: Vec<Element>) -> Self {
        Self::from_items(items)
    }
}

impl FromIterator<Element> for FluentList {
    fn from_iter<I: IntoIterator<Item = Element>>(iterable: I) -> Self {
        Self::from_items(iterable.into_iter().collect())
    }
}

impl From<FluentList> for Element {
    fn from(list: FluentList) -> Self {
        list.to_element()
    }
}

impl From<&FluentList> for Element {
    fn from(list: &FluentList) -> Self {
        list.to_element()
    }
}

impl Serialize for FluentList {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.payload {
            Payload::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Payload::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

// =============================================================================
// Factory
// =============================================================================

/// Creates a list from the given value.
///
/// Ergonomic sugar for [`FluentList::of`].
///
/// # Examples
///
/// ```rust
/// use fluentlist::{fluent, Element};
///
/// assert_eq!(fluent("[1, 5, 3]").sum(), Element::from(9));
/// ```
#[must_use]
pub fn fluent(value: impl Into<Element>) -> FluentList {
    FluentList::of(value)
}
