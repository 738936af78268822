//! The strategy-selecting grouping dispatcher.

use crate::error::{ListError, Result};
use crate::ops::shape;
use crate::value::{Element, Fields, Scalar};

/// Buckets elements by a derived group key.
///
/// The result maps the string rendering of each derived key (the result of
/// calling `iterator` with the relevant value) to the sequence of original
/// elements assigned to that group, in encounter order. The strategy is
/// chosen per element, in priority order:
///
/// 1. a record element with `key` given: `iterator(record[key])`
/// 2. an object element with `key` given: `iterator(object.field)`
/// 3. a bare scalar in a sequence that is neither associative nor
///    multi-level nor object-bearing, with no `key` given:
///    `iterator(element)` directly
/// 4. anything else is silently skipped; not grouped, and not an error
///
/// `associative` reports whether the caller's whole payload is
/// record-shaped; the values of an associative payload are never grouped as
/// bare scalars.
///
/// # Errors
///
/// Returns [`ListError::MissingKey`] when a record element lacks `key`, and
/// [`ListError::MissingField`] when an object element does not declare it.
pub fn group_by<F>(
    items: &[Element],
    mut iterator: F,
    key: Option<&str>,
    associative: bool,
) -> Result<Fields>
where
    F: FnMut(&Element) -> Element,
{
    let scalars_only =
        !associative && !shape::is_multi_level(items) && !shape::contains_objects(items);
    let mut groups = Fields::new();
    for element in items {
        match element {
            Element::Record(fields) => {
                if let Some(name) = key {
                    let value = fields.get(name).ok_or_else(|| ListError::MissingKey {
                        key: name.to_string(),
                    })?;
                    bucket(&mut groups, &iterator(value), element);
                }
            }
            Element::Object(object) => {
                if let Some(name) = key {
                    let value = object.field(name).ok_or_else(|| ListError::MissingField {
                        key: name.to_string(),
                    })?;
                    bucket(&mut groups, &iterator(value), element);
                }
            }
            _ if scalars_only && key.is_none() => bucket(&mut groups, &iterator(element), element),
            // neither keyed nor part of a flat scalar sequence: skipped
            _ => {}
        }
    }
    Ok(groups)
}

fn bucket(groups: &mut Fields, group_key: &Element, element: &Element) {
    let rendered = bucket_key(group_key);
    let slot = groups
        .entry(rendered)
        .or_insert_with(|| Element::Sequence(Vec::new()));
    if let Element::Sequence(members) = slot {
        members.push(element.clone());
    }
}

/// String rendering for a derived group key.
///
/// Record keys are strings, so every derived key is rendered: strings pass
/// through verbatim, integers render as decimal, and integral floats
/// collapse to their integer form (`floor(4.2)` buckets under `"4"`).
/// Anything else uses its JSON rendering.
fn bucket_key(value: &Element) -> String {
    match value {
        Element::Scalar(Scalar::String(text)) => text.clone(),
        Element::Scalar(Scalar::Int(number)) => number.to_string(),
        #[allow(clippy::cast_possible_truncation)]
        Element::Scalar(Scalar::Float(number)) if number.is_finite() && number.fract() == 0.0 => {
            (*number as i64).to_string()
        }
        other => other.to_json_value().to_string(),
    }
}
