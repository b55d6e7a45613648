//! Field paths and sets of field paths.
//!
//! This module provides the types used to record which fields of a nested value
//! a writer claims, and to compare and reconcile those claims.
//!
//! # Core Types
//!
//! - [`PathElement`] - One step into a value: field name, key, value, or index
//! - [`KeyFields`] - The identifying fields of an associative-list entry
//! - [`PathElementSet`] - Ordered, de-duplicated path elements
//! - [`Path`] - A sequence of path elements from the root to one field
//! - [`Set`] - A prefix-sharing trie of paths with membership and set algebra

pub mod element;
pub mod element_set;
pub mod errors;
pub mod path;
pub mod set;

pub use element::{KeyFields, PathElement};
pub use element_set::PathElementSet;
pub use errors::FieldPathError;
pub use path::Path;
pub use set::Set;
