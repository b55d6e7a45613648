//! Paths locating one field inside a nested value.
//!
//! A [`Path`] is an ordered, immutable sequence of [`PathElement`]s from the root
//! of a value down to one field. Paths are usually built with the
//! [`path!`](crate::path!) macro, which converts each argument into a
//! path element:
//!
//! ```rust
//! use fieldpath::{KeyFields, Path, PathElement, path};
//!
//! // Strings become field names, integers become list indices
//! let path = path!("spec", "containers", 0, "image");
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.to_string(), ".spec.containers[0].image");
//!
//! // Associative-list entries are addressed by key
//! let key = KeyFields::single("name", "nginx");
//! let path = path!("spec", "containers", key, "image");
//! assert_eq!(path.to_string(), ".spec.containers[name=\"nginx\"].image");
//!
//! // Builder form
//! let path = Path::new().push("metadata").push("labels");
//! assert_eq!(path.last(), Some(&PathElement::field("labels")));
//! ```
//!
//! The textual form is for diagnostics only. Equality is element-wise.

use std::{fmt, ops::Index, slice};

use super::PathElement;

/// An ordered sequence of path elements.
///
/// Two paths are equal iff they have the same length and are element-wise equal.
/// Paths order lexicographically by element.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from its elements, root first.
    pub fn from_elements(elements: impl IntoIterator<Item = PathElement>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    /// Returns the number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `position`, or `None` if out of range.
    pub fn get(&self, position: usize) -> Option<&PathElement> {
        self.elements.get(position)
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn iter(&self) -> slice::Iter<'_, PathElement> {
        self.elements.iter()
    }

    /// Returns the last element of the path, or `None` if empty.
    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last()
    }

    /// Returns the parent path, or `None` if this is the root.
    pub fn parent(&self) -> Option<Path> {
        self.elements.split_last().map(|(_, rest)| Path {
            elements: rest.to_vec(),
        })
    }

    /// Adds an element to the end of this path.
    pub fn push(mut self, element: impl Into<PathElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: &Path) -> Self {
        self.elements.extend(other.elements.iter().cloned());
        self
    }

    /// Returns `true` if `prefix` is a (not necessarily proper) prefix of this path.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.elements.starts_with(&prefix.elements)
    }
}

impl Index<usize> for Path {
    type Output = PathElement;

    fn index(&self, position: usize) -> &Self::Output {
        &self.elements[position]
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathElement;
    type IntoIter = slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Self::from_elements(iter)
    }
}

impl From<Vec<PathElement>> for Path {
    fn from(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() {
            return write!(f, "<root>");
        }
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Constructs a [`Path`] from anything convertible into a [`PathElement`].
///
/// # Syntax
///
/// - `path!()` - Empty path
/// - `path!("spec", "replicas")` - Field names
/// - `path!("items", 3)` - Field name then list index
/// - `path!("ports", key, "protocol")` - [`KeyFields`](crate::KeyFields) or
///   [`Value`](crate::Value) arguments become key and value elements
///
/// # Examples
///
/// ```rust
/// # use fieldpath::{path, PathElement, Value};
/// let path = path!("finalizers", Value::from("kubernetes"));
/// assert_eq!(path[1], PathElement::value("kubernetes"));
///
/// // Trailing commas are accepted
/// let path = path!("a", "b",);
/// assert_eq!(path.len(), 2);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };

    ($($element:expr),+ $(,)?) => {{
        $crate::Path::from_elements([
            $($crate::PathElement::from($element)),+
        ])
    }};
}
