//! # fluentlist
//!
//! An immutable-by-convention functional collection wrapper.
//!
//! `fluentlist` wraps a heterogeneous sequence, built from a native
//! sequence, a keyed record, a JSON-encoded string, or another wrapper,
//! and exposes a fluent chain of transformation operations: map, filter,
//! reduce, flatten, grouping, zipping, chunking, and set-like comparisons.
//!
//! ## Overview
//!
//! - **Value model** ([`value`]): a tagged `Element` variant with `Scalar`,
//!   `Sequence`, `Record`, and `Object` kinds, dispatched by exhaustive
//!   pattern match rather than runtime type probing.
//! - **Engine** ([`ops`]): iteration primitives, the depth-bounded flatten
//!   algorithm, shape classifiers, the N-ary zip family, and the grouping
//!   dispatcher.
//! - **Facade** ([`list`]): [`FluentList`], the public wrapper whose every
//!   transformation returns a new immutable snapshot.
//!
//! Everything is strict and synchronous: each operation materializes a full
//! new sequence before returning. There is no lazy evaluation, no indexing,
//! and no shared mutable state between the instances a chain produces.
//!
//! ## Example
//!
//! ```rust
//! use fluentlist::prelude::*;
//!
//! let spread = fluent("[[1, 2], [3, 4], [5]]")
//!     .flatten(1)
//!     .filter(|element, _| matches!(element, Element::Scalar(Scalar::Int(n)) if *n > 1))
//!     .chunk(2);
//! assert_eq!(spread.to_json(), "[[2,3],[4,5]]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod list;
pub mod ops;
pub mod value;

pub use error::{ListError, Result};
pub use list::{fluent, FluentList};
pub use value::{Element, Fields, Object, Scalar};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use fluentlist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ListError, Result};
    pub use crate::list::{fluent, FluentList};
    pub use crate::value::{Element, Fields, Object, Scalar};
}
