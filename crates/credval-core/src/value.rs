//! Input values handed to validators
//!
//! Validators see a borrowed view of the field rather than a concrete Rust
//! type, so a single catalog can hold numeric and textual checks side by side.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of value a validator expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Integer,
    String,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "an integer"),
            ValueKind::String => write!(f, "a string"),
        }
    }
}

/// A field value as seen by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Absent value (JSON `null`)
    Null,

    /// Integral number; wide enough to hold any JSON integer
    Int(i128),

    /// Text value
    Text(&'a str),

    /// Any other JSON shape (float, bool, array, object), kept rendered
    Other(String),
}

impl<'a> FieldValue<'a> {
    /// Kind of this value, if it is one validators understand
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            FieldValue::Int(_) => Some(ValueKind::Integer),
            FieldValue::Text(_) => Some(ValueKind::String),
            FieldValue::Null | FieldValue::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render the value for substitution into an error message
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Other(s) => write!(f, "{}", s),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue<'_> {
                fn from(value: $t) -> Self {
                    FieldValue::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::String(s) => FieldValue::Text(s.as_str()),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Int(i128::from(u))
                } else {
                    FieldValue::Other(n.to_string())
                }
            }
            other => FieldValue::Other(other.to_string()),
        }
    }
}
