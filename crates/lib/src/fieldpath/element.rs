//! Path elements: one step from a value to one of its children.
//!
//! A [`PathElement`] is a closed sum over the four ways a nested value can be
//! descended into:
//!
//! - [`PathElement::FieldName`] - a named field of an object
//! - [`PathElement::Key`] - an entry of an associative list, identified by [`KeyFields`]
//! - [`PathElement::Value`] - an entry of a set-like list, identified by its own value
//! - [`PathElement::Index`] - a position in a plain list
//!
//! Elements are totally ordered: first by variant in the order listed above, then
//! by payload. Sets iterate and render in this order.

use std::{cmp::Ordering, fmt};

use crate::{fieldpath::FieldPathError, value::Value};

/// The identifying fields of one associative-list entry.
///
/// Pairs are kept sorted by field name and field names are unique, so two keys
/// built from the same pairs in any order are identical.
///
/// ```
/// use fieldpath::{KeyFields, Value};
///
/// let a = KeyFields::new([("port", Value::Int(80)), ("name", Value::from("web"))])?;
/// let b = KeyFields::new([("name", Value::from("web")), ("port", Value::Int(80))])?;
/// assert_eq!(a, b);
/// assert!(KeyFields::new([("name", "x"), ("name", "y")]).is_err());
/// # Ok::<(), fieldpath::FieldPathError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyFields {
    fields: Vec<(String, Value)>,
}

impl KeyFields {
    /// Builds a key from field-name/value pairs.
    ///
    /// # Errors
    /// Returns [`FieldPathError::InvalidKey`] if a field name repeats. Nothing is
    /// deduplicated silently.
    pub fn new<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Result<Self, FieldPathError>
    where
        N: Into<String>,
        V: Into<Value>,
    {
        let mut fields: Vec<(String, Value)> = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        if let Some(dup) = fields.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(FieldPathError::InvalidKey {
                field: dup[0].0.clone(),
            });
        }

        Ok(Self { fields })
    }

    /// Builds a key with a single identifying field.
    pub fn single(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            fields: vec![(name.into(), value.into())],
        }
    }

    /// Returns the value for a field name, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .binary_search_by(|(field, _)| field.as_str().cmp(name))
            .ok()
            .map(|i| &self.fields[i].1)
    }

    /// Iterates the pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Ord for KeyFields {
    /// Pairwise by (field name, value), then shorter keys first.
    fn cmp(&self, other: &Self) -> Ordering {
        for ((a_name, a_value), (b_name, b_value)) in self.fields.iter().zip(&other.fields) {
            let ord = a_name.cmp(b_name).then_with(|| a_value.compare(b_value));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.fields.len().cmp(&other.fields.len())
    }
}

impl PartialOrd for KeyFields {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for KeyFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// One step of a [`Path`](crate::Path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathElement {
    /// A named field of an object
    FieldName(String),
    /// An associative-list entry, identified by a subset of its fields
    Key(KeyFields),
    /// A set-like list entry, identified by its own scalar value
    Value(Value),
    /// A position in a plain list
    Index(i64),
}

impl PathElement {
    pub fn field(name: impl Into<String>) -> Self {
        PathElement::FieldName(name.into())
    }

    pub fn index(index: i64) -> Self {
        PathElement::Index(index)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        PathElement::Value(value.into())
    }

    /// Builds an associative-list key element.
    ///
    /// # Errors
    /// Returns [`FieldPathError::InvalidKey`] if a field name repeats.
    pub fn key<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Result<Self, FieldPathError>
    where
        N: Into<String>,
        V: Into<Value>,
    {
        KeyFields::new(pairs).map(PathElement::Key)
    }

    /// Returns the variant name
    pub fn kind(&self) -> &'static str {
        match self {
            PathElement::FieldName(_) => "field",
            PathElement::Key(_) => "key",
            PathElement::Value(_) => "value",
            PathElement::Index(_) => "index",
        }
    }

    pub fn as_field_name(&self) -> Option<&str> {
        match self {
            PathElement::FieldName(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<i64> {
        match self {
            PathElement::Index(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&KeyFields> {
        match self {
            PathElement::Key(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            PathElement::Value(value) => Some(value),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            PathElement::FieldName(_) => 0,
            PathElement::Key(_) => 1,
            PathElement::Value(_) => 2,
            PathElement::Index(_) => 3,
        }
    }
}

impl Ord for PathElement {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PathElement::FieldName(a), PathElement::FieldName(b)) => a.cmp(b),
            (PathElement::Key(a), PathElement::Key(b)) => a.cmp(b),
            (PathElement::Value(a), PathElement::Value(b)) => a.compare(b),
            (PathElement::Index(a), PathElement::Index(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for PathElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::FieldName(name) => write!(f, ".{name}"),
            PathElement::Key(key) => write!(f, "[{key}]"),
            PathElement::Value(value) => write!(f, "[={value}]"),
            PathElement::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        PathElement::FieldName(name.to_string())
    }
}

impl From<String> for PathElement {
    fn from(name: String) -> Self {
        PathElement::FieldName(name)
    }
}

impl From<i32> for PathElement {
    fn from(index: i32) -> Self {
        PathElement::Index(index as i64)
    }
}

impl From<i64> for PathElement {
    fn from(index: i64) -> Self {
        PathElement::Index(index)
    }
}

impl From<usize> for PathElement {
    fn from(index: usize) -> Self {
        PathElement::Index(index as i64)
    }
}

impl From<KeyFields> for PathElement {
    fn from(key: KeyFields) -> Self {
        PathElement::Key(key)
    }
}

impl From<Value> for PathElement {
    fn from(value: Value) -> Self {
        PathElement::Value(value)
    }
}

impl From<&PathElement> for PathElement {
    fn from(element: &PathElement) -> Self {
        element.clone()
    }
}
