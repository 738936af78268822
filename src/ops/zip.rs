//! The N-ary transpose family: zip, unzip, and `zip_with`.
//!
//! All three share one transpose core. Access is index-bounded: with rows of
//! unequal length, tuple *i* gathers entries only from the rows that actually
//! have an *i*-th element; nothing is padded with nulls.

use crate::error::{ListError, Result};
use crate::value::Element;

/// Transposes the base sequence with at least one peer sequence.
///
/// Tuple *i* of the result is `[base[i], others[0][i], …]`, each tuple a
/// sequence element.
///
/// # Errors
///
/// Returns [`ListError::MissingArgument`] when no peer sequence is given;
/// zipping against nothing is invalid, not a no-op.
pub fn zip(base: &[Element], others: &[Vec<Element>]) -> Result<Vec<Element>> {
    if others.is_empty() {
        return Err(ListError::MissingArgument { operation: "Zip" });
    }
    let mut rows: Vec<&[Element]> = Vec::with_capacity(others.len() + 1);
    rows.push(base);
    rows.extend(others.iter().map(Vec::as_slice));
    Ok(transpose(&rows).into_iter().map(Element::Sequence).collect())
}

/// The inverse transpose: gathers the *i*-th element of every row.
///
/// # Errors
///
/// Returns [`ListError::InvalidShape`] unless the input is multidimensional:
/// non-empty, with every element itself a sequence.
pub fn unzip(items: &[Element]) -> Result<Vec<Element>> {
    let mut rows: Vec<&[Element]> = Vec::with_capacity(items.len());
    for element in items {
        match element {
            Element::Sequence(row) => rows.push(row.as_slice()),
            _ => return Err(ListError::InvalidShape),
        }
    }
    if rows.is_empty() {
        return Err(ListError::InvalidShape);
    }
    Ok(transpose(&rows).into_iter().map(Element::Sequence).collect())
}

/// Transposes like [`zip`], then combines each tuple with the callback
/// instead of returning raw tuples.
///
/// The combiner receives the tuple as a slice of its elements.
///
/// # Errors
///
/// Returns [`ListError::MissingArgument`] when no peer sequence is given.
pub fn zip_with<F>(base: &[Element], mut combiner: F, others: &[Vec<Element>]) -> Result<Vec<Element>>
where
    F: FnMut(&[Element]) -> Element,
{
    if others.is_empty() {
        return Err(ListError::MissingArgument { operation: "ZipWith" });
    }
    let mut rows: Vec<&[Element]> = Vec::with_capacity(others.len() + 1);
    rows.push(base);
    rows.extend(others.iter().map(Vec::as_slice));
    Ok(transpose(&rows)
        .into_iter()
        .map(|tuple| combiner(&tuple))
        .collect())
}

fn transpose(rows: &[&[Element]]) -> Vec<Vec<Element>> {
    let mut tuples: Vec<Vec<Element>> = Vec::new();
    for row in rows {
        for (index, element) in row.iter().enumerate() {
            if tuples.len() <= index {
                tuples.resize_with(index + 1, Vec::new);
            }
            tuples[index].push(element.clone());
        }
    }
    tuples
}
