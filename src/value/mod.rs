//! The tagged value model wrapped and transformed by the engine.
//!
//! Every element of a wrapped sequence is one of four kinds:
//!
//! - [`Scalar`]: a number, string, boolean, or null
//! - `Sequence`: a nested list, which triggers the multi-level classification
//! - `Record`: a keyed mapping with string keys, looked up dynamically
//! - [`Object`]: a named-field structure, looked up by declared field name
//!
//! `Record` and `Object` carry the same storage but are kept distinct because
//! the grouping and picking strategies must decide between "key lookup" and
//! "field lookup". Both preserve insertion order.
//!
//! # Examples
//!
//! ```rust
//! use fluentlist::value::{Element, Scalar};
//!
//! let element = Element::from(42);
//! assert!(element.is_scalar());
//! assert_eq!(element.as_scalar(), Some(&Scalar::Int(42)));
//!
//! // Elements render as their JSON encoding.
//! let nested = Element::from(vec![Element::from(1), Element::from("two")]);
//! assert_eq!(nested.to_string(), r#"[1,"two"]"#);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

/// Keyed storage shared by records and object fields.
///
/// String keys, insertion-ordered: grouping buckets and record fields are
/// encounter-ordered, so ordinary hash maps are not a substitute.
pub type Fields = IndexMap<String, Element>;

// =============================================================================
// Scalar
// =============================================================================

/// A leaf value: number, string, boolean, or null.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A UTF-8 string.
    String(String),
}

impl Scalar {
    /// Truthiness used by `compact` and `pull`: null, `false`, numeric zero,
    /// and the empty string are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::String(text) => !text.is_empty(),
        }
    }
}

// =============================================================================
// Object
// =============================================================================

/// A named-field structure with identity.
///
/// Distinct from a record only in its lookup mechanism: fields are accessed
/// by declared field name via [`Object::field`] rather than by dynamic key.
/// JSON decoding produces objects unless the caller asks for records.
///
/// # Examples
///
/// ```rust
/// use fluentlist::value::{Element, Object};
///
/// let team = Object::new()
///     .with_field("name", "A")
///     .with_field("score", 91);
///
/// assert_eq!(team.field("score"), Some(&Element::from(91)));
/// assert!(!team.has_field("rank"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Object {
    fields: Fields,
}

impl Object {
    /// Creates an object with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Fields::new(),
        }
    }

    /// Creates an object from already-collected fields.
    #[must_use]
    pub const fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// Returns a copy of this object with one more declared field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Element>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Looks up a declared field by name.
    #[inline]
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Element> {
        self.fields.get(name)
    }

    /// Returns `true` if the field is declared on this object.
    #[inline]
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The declared fields, in declaration order.
    #[inline]
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the object, yielding its fields (the record "cast").
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Number of declared fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the object declares no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Element
// =============================================================================

/// A value of one of four kinds, dispatched by exhaustive pattern match.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// A leaf value.
    Scalar(Scalar),
    /// A nested list.
    Sequence(Vec<Element>),
    /// A keyed mapping with dynamic string keys.
    Record(Fields),
    /// A named-field structure.
    Object(Object),
}

impl Element {
    /// The null scalar.
    #[must_use]
    pub const fn null() -> Self {
        Self::Scalar(Scalar::Null)
    }

    /// Returns `true` if this element is a leaf value.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Returns `true` if this element is a nested list.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` if this element is a keyed record.
    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// Returns `true` if this element is a named-field object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns the leaf value if this element is one.
    #[inline]
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the nested list if this element is one.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Element]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the record fields if this element is a record.
    #[inline]
    #[must_use]
    pub const fn as_record(&self) -> Option<&Fields> {
        match self {
            Self::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the object if this element is one.
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Truthiness used by `compact` and `pull`.
    ///
    /// Scalars follow [`Scalar::is_truthy`]; sequences, records, and objects
    /// are always truthy, even when empty.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Scalar(scalar) => scalar.is_truthy(),
            Self::Sequence(_) | Self::Record(_) | Self::Object(_) => true,
        }
    }

    /// Converts a decoded JSON value into an element.
    ///
    /// `objects_as_records` controls what JSON objects become: records (key
    /// lookup) when `true`, objects (field lookup) when `false`. The flag
    /// applies recursively.
    #[must_use]
    pub fn from_json_value(value: Value, objects_as_records: bool) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(value) => Self::Scalar(Scalar::Bool(value)),
            Value::Number(number) => number.as_i64().map_or_else(
                || Self::Scalar(Scalar::Float(number.as_f64().unwrap_or(0.0))),
                |int| Self::Scalar(Scalar::Int(int)),
            ),
            Value::String(text) => Self::Scalar(Scalar::String(text)),
            Value::Array(values) => Self::Sequence(
                values
                    .into_iter()
                    .map(|value| Self::from_json_value(value, objects_as_records))
                    .collect(),
            ),
            Value::Object(entries) => {
                let fields: Fields = entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from_json_value(value, objects_as_records)))
                    .collect();
                if objects_as_records {
                    Self::Record(fields)
                } else {
                    Self::Object(Object::from_fields(fields))
                }
            }
        }
    }

    /// Encodes this element as a JSON value.
    ///
    /// Records and objects both encode as JSON objects; the field-lookup
    /// distinction does not survive serialization.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Scalar(Scalar::Null) => Value::Null,
            Self::Scalar(Scalar::Bool(value)) => Value::Bool(*value),
            Self::Scalar(Scalar::Int(value)) => Value::from(*value),
            Self::Scalar(Scalar::Float(value)) => Value::from(*value),
            Self::Scalar(Scalar::String(text)) => Value::String(text.clone()),
            Self::Sequence(items) => Value::Array(items.iter().map(Self::to_json_value).collect()),
            Self::Record(fields) => fields_to_json(fields),
            Self::Object(object) => fields_to_json(object.fields()),
        }
    }
}

fn fields_to_json(fields: &Fields) -> Value {
    let mut entries = serde_json::Map::with_capacity(fields.len());
    for (key, value) in fields {
        entries.insert(key.clone(), value.to_json_value());
    }
    Value::Object(entries)
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.to_json_value())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<Scalar> for Element {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<()> for Element {
    fn from(_: ()) -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::Scalar(Scalar::String(text.to_string()))
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self::Scalar(Scalar::String(text))
    }
}

impl From<Vec<Element>> for Element {
    fn from(items: Vec<Element>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Fields> for Element {
    fn from(fields: Fields) -> Self {
        Self::Record(fields)
    }
}

impl From<Object> for Element {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(text) => serializer.serialize_str(text),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_fields(&self.fields, serializer)
    }
}

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Self::Record(fields) => serialize_fields(fields, serializer),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

fn serialize_fields<S>(fields: &Fields, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (key, value) in fields {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
