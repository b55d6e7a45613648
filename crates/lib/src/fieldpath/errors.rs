//! Error types for field path construction.
//!
//! Only construction can fail. Lookups and set algebra are total: an absent key
//! or a mismatched element kind simply contributes nothing.

use thiserror::Error;

/// Errors that can occur while building path elements, paths, or sets.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldPathError {
    /// An associative-list key named the same field more than once
    #[error("Invalid key: field '{field}' appears more than once")]
    InvalidKey {
        /// The repeated field name
        field: String,
    },

    /// A zero-length path was submitted where a claim is required
    #[error("Empty path: the root itself cannot be claimed")]
    EmptyPath,

    /// A value that cannot identify a list entry (arrays, objects)
    #[error("Unsupported value for a path element: {kind}")]
    UnsupportedValue {
        /// Description of the rejected value
        kind: String,
    },
}

impl FieldPathError {
    /// Check if this error came from associative-list key construction.
    pub fn is_key_error(&self) -> bool {
        matches!(self, FieldPathError::InvalidKey { .. })
    }

    /// Check if this error is a rejected zero-length path.
    pub fn is_empty_path(&self) -> bool {
        matches!(self, FieldPathError::EmptyPath)
    }

    /// Check if this error is a rejected scalar value.
    pub fn is_value_error(&self) -> bool {
        matches!(self, FieldPathError::UnsupportedValue { .. })
    }

    /// Get the offending field name if this is a key error
    pub fn field(&self) -> Option<&str> {
        match self {
            FieldPathError::InvalidKey { field } => Some(field),
            _ => None,
        }
    }
}

// Conversion from FieldPathError to the main Error type
impl From<FieldPathError> for crate::Error {
    fn from(err: FieldPathError) -> Self {
        crate::Error::FieldPath(err)
    }
}
