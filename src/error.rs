//! Error types for contract violations raised by the transformation engine.
//!
//! Every error is raised synchronously at the call that detects the
//! violation; no partial result is returned and nothing is retried. Each
//! variant represents a programming-contract violation rather than a
//! transient condition, so callers are expected to catch at the boundary of
//! their own code. The one documented exception to fail-fast reporting is
//! the grouping dispatcher's silent skip of elements that are neither keyed
//! nor part of a flat scalar sequence.

use thiserror::Error;

/// Result alias used by the fallible operations of this crate.
pub type Result<T> = core::result::Result<T, ListError>;

/// Contract violations detectable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A parameter that must be a sequence was something else.
    #[error("{operation} expects the provided argument to be of type array.")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
    },

    /// An operation that compares against peer sequences was called without
    /// the minimum number of them.
    #[error("{operation} expects at least one array as an argument.")]
    MissingArgument {
        /// The operation that was called without its peers.
        operation: &'static str,
    },

    /// `unzip` was invoked on a payload that is not a sequence of sequences.
    #[error("Unzip can only be called on a multidimensional array.")]
    InvalidShape,

    /// A grouping key was absent from a record element.
    #[error("The key `{key}` does not exist in the current collection.")]
    MissingKey {
        /// The key that was looked up.
        key: String,
    },

    /// A grouping key named a field that an object element does not declare.
    #[error("The key `{key}` is not a valid object property.")]
    MissingField {
        /// The field name that was looked up.
        key: String,
    },
}
