//! The transformation engine.
//!
//! Internal primitives that every facade operation is built on:
//!
//! - [`iterate`]: single-pass map/filter/reduce/each traversal and the
//!   depth-bounded flatten engine
//! - [`shape`]: classifiers deciding between the grouping/picking strategies
//! - [`zip`]: the N-ary transpose family (zip, unzip, `zip_with`)
//! - [`group`]: the strategy-selecting grouping dispatcher
//!
//! All functions here are strict and side-effect-free: they materialize a
//! full new sequence before returning and never mutate their input.

pub mod group;
pub mod iterate;
pub mod shape;
pub mod zip;
