//! Scalar values used to identify entries of set-like and associative lists.
//!
//! Field paths never carry whole value trees. The only values that appear inside a
//! path are scalars: the element of a set-like list (`PathElement::Value`) and the
//! field values that make up an associative-list key (`PathElement::Key`). This
//! module provides that scalar model together with the comparator the path types
//! rely on for equality and canonical ordering.
//!
//! # Ordering
//!
//! [`Value::compare`] defines a total order across all variants:
//!
//! - `Null` sorts first, then `Bool`, then numbers, then `Text`
//! - `Int` and `Float` are both numbers and compare numerically, so `Int(1)`
//!   and `Float(1.0)` are equal
//! - `-0.0` equals `0.0` and NaN sorts after every other number
//!
//! ```
//! use fieldpath::Value;
//!
//! assert!(Value::Null < Value::Bool(false));
//! assert!(Value::Int(2) < Value::Float(2.5));
//! assert_eq!(Value::Int(1), Value::Float(1.0));
//! assert!(Value::Float(1e9) < Value::Text("a".to_string()));
//! ```

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::fieldpath::FieldPathError;

/// A scalar value that can appear inside a path element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON `null`
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
        }
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Int` and `Float`
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value as a float, for either number variant
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Rank of the variant family in the total order.
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
        }
    }

    /// Compares two values under the total order described in the module docs.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => compare_floats(*a, *b),
            (Value::Int(a), Value::Float(b)) => compare_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => compare_int_float(*b, *a).reverse(),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Float ordering with every NaN sorted after all numbers.
fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // -0.0 and 0.0 are the same number
        (false, false) if a == b => Ordering::Equal,
        (false, false) => a.total_cmp(&b),
    }
}

/// Numeric comparison of an integer against a float.
///
/// Integers beyond 2^53 lose precision as `f64`, so a tie in float space is
/// settled by comparing the float converted back to an integer.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    match compare_floats(int as f64, float) {
        Ordering::Equal if float < i64::MAX as f64 => int.cmp(&(float as i64)),
        // float is exactly 2^63, above every i64
        Ordering::Equal => Ordering::Less,
        ord => ord,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = FieldPathError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(FieldPathError::UnsupportedValue {
                        kind: format!("number {n} out of range"),
                    })
                }
            }
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Array(_) => Err(FieldPathError::UnsupportedValue {
                kind: "array".to_string(),
            }),
            serde_json::Value::Object(_) => Err(FieldPathError::UnsupportedValue {
                kind: "object".to_string(),
            }),
        }
    }
}

impl FromStr for Value {
    type Err = crate::Error;

    /// Parses a JSON scalar, e.g. `"first"`, `80`, `true` or `null`.
    fn from_str(s: &str) -> crate::Result<Self> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Ok(Value::try_from(json)?)
    }
}
