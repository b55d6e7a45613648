//!
//! fieldpath: sets of field paths inside nested structured values.
//!
//! Declarative, multi-writer configuration systems need to know which writer owns
//! which fields of an object. This library provides the building blocks for that
//! bookkeeping without materializing value trees.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: Scalars (null, booleans, numbers, text) with a total order, used to identify list entries.
//! * **Path elements (`fieldpath::PathElement`)**: One step into a value. A field name, a list index, a set-like list value, or an associative-list key (`fieldpath::KeyFields`).
//! * **Paths (`fieldpath::Path`)**: An immutable sequence of path elements locating one field. Build them with the [`path!`] macro.
//! * **Sets (`fieldpath::Set`)**: A prefix-sharing trie of paths supporting exact membership, equality, union, intersection and difference.
//!
//! ```
//! use fieldpath::{path, KeyFields, Set};
//!
//! let a = Set::new_from([path!("foo", 0), path!("foo", 1)]);
//! let b = Set::new_from([path!("foo", 1), path!("foo", 2)]);
//!
//! assert_eq!(a.intersection(&b), Set::new_from([path!("foo", 1)]));
//! assert_eq!(a.difference(&b), Set::new_from([path!("foo", 0)]));
//! ```

pub mod fieldpath;
pub mod value;

pub use fieldpath::{FieldPathError, KeyFields, Path, PathElement, PathElementSet, Set};
pub use value::Value;

/// Result type used throughout the fieldpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the fieldpath library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from path and set construction
    #[error(transparent)]
    FieldPath(fieldpath::FieldPathError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::FieldPath(_) => "fieldpath",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is fieldpath-related.
    pub fn is_fieldpath_error(&self) -> bool {
        matches!(self, Error::FieldPath(_))
    }

    /// Check if this error indicates invalid input at construction time.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::FieldPath(err) => {
                err.is_key_error() || err.is_empty_path() || err.is_value_error()
            }
            _ => false,
        }
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
