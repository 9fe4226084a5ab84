//! Command-line value coercion
//!
//! A VALUE argument is plain text unless the field type expects an integer
//! and the text parses as one. With `--json` it is read as a JSON literal.

use credval_core::{FieldValue, ValueKind};
use serde_json::Value;

/// A value taken from the command line, owned until it is validated
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Int(i128),
    Text(String),
    Json(Value),
}

impl InputValue {
    /// Coerce `raw` for a validator expecting `kind`
    pub fn parse(kind: ValueKind, raw: &str, as_json: bool) -> Result<Self, serde_json::Error> {
        if as_json {
            return serde_json::from_str(raw).map(InputValue::Json);
        }
        match (kind, raw.parse::<i128>()) {
            (ValueKind::Integer, Ok(number)) => Ok(InputValue::Int(number)),
            _ => Ok(InputValue::Text(raw.to_string())),
        }
    }

    pub fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            InputValue::Int(number) => FieldValue::Int(*number),
            InputValue::Text(text) => FieldValue::Text(text),
            InputValue::Json(value) => FieldValue::from(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credval_core::ValidationError;
    use credval_formats::{catalog, FieldType};

    fn check(field_type: FieldType, raw: &str, as_json: bool) -> Result<(), ValidationError> {
        let entry = catalog().get(field_type);
        let input = InputValue::parse(entry.validator().expects(), raw, as_json).unwrap();
        entry.validate(input.as_field_value())
    }

    #[test]
    fn test_integer_text_becomes_int() {
        assert_eq!(
            InputValue::parse(ValueKind::Integer, "0", false).unwrap(),
            InputValue::Int(0)
        );
        assert!(check(FieldType::IntEpoch, "0", false).is_ok());
    }

    #[test]
    fn test_negative_epoch_is_rejected_by_range() {
        let err = check(FieldType::IntEpoch, "-1", false).unwrap_err();
        assert_eq!(err.to_string(), "Value -1 is not a valid integer epoch time.");
    }

    #[test]
    fn test_non_numeric_text_stays_text() {
        assert_eq!(
            InputValue::parse(ValueKind::Integer, "abc", false).unwrap(),
            InputValue::Text("abc".to_string())
        );
        let err = check(FieldType::IntEpoch, "abc", false).unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedType { .. }));
    }

    #[test]
    fn test_string_kind_never_coerced() {
        assert_eq!(
            InputValue::parse(ValueKind::String, "1.0", false).unwrap(),
            InputValue::Text("1.0".to_string())
        );
        assert_eq!(
            InputValue::parse(ValueKind::String, "20", false).unwrap(),
            InputValue::Text("20".to_string())
        );
        assert!(check(FieldType::IndyVersion, "1.0", false).is_ok());
    }

    #[test]
    fn test_json_literal() {
        let err = check(FieldType::Base64, "null", true).unwrap_err();
        assert_eq!(err.to_string(), "Value is not a valid base64 encoding");
        assert!(check(FieldType::IntEpoch, "-5", true).is_err());
        assert!(check(FieldType::IndyDid, "\"WgWxqztrNooG92RXvxSTWv\"", true).is_ok());
        assert!(InputValue::parse(ValueKind::String, "not json", true).is_err());
    }
}
