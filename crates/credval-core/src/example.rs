//! Documentation examples attached to validators

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Canonical example value for a validator
///
/// Serialized untagged so an example table renders as plain JSON values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Example {
    Int(i64),
    Text(String),
}

impl Example {
    pub fn text(value: impl Into<String>) -> Self {
        Example::Text(value.into())
    }

    /// Borrow the example as a validator input
    pub fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Example::Int(i) => FieldValue::Int(i128::from(*i)),
            Example::Text(s) => FieldValue::Text(s),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Example::Int(i) => serde_json::Value::from(*i),
            Example::Text(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

impl std::fmt::Display for Example {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Example::Int(i) => write!(f, "{}", i),
            Example::Text(s) => write!(f, "{}", s),
        }
    }
}
