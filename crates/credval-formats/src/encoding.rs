//! Encoded-blob validators: base64 and hex SHA-256 digests

use credval_core::strategy::{MessageTemplate, RegexValidator};
use credval_core::{
    Example, FieldValue, FormatValidator, ValidationError, ValidationOutcome, ValueKind,
};
use once_cell::sync::Lazy;

const BASE64_ERROR: MessageTemplate = MessageTemplate::new("Value is not a valid base64 encoding");

static BASE64: Lazy<RegexValidator> = Lazy::new(|| {
    RegexValidator::new(r"^[a-zA-Z0-9+/]*={0,2}$", BASE64_ERROR).expect("base64 regex")
});

// Loose on purpose: `+` and `/` are accepted and the decoded length is not checked.
static SHA256: Lazy<RegexValidator> = Lazy::new(|| {
    RegexValidator::new(
        r"^[a-fA-F0-9+/]{64}$",
        MessageTemplate::new("Value {input} is not a valid (binhex-encoded) SHA-256 hash."),
    )
    .expect("sha256 regex")
});

/// Base64 with optional padding; length must be a multiple of 4
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl Base64 {
    pub const EXAMPLE: &'static str = "ey4uLn0=";
}

impl FormatValidator for Base64 {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        if value.is_null() {
            return Err(ValidationError::Format {
                input: value.render(),
                message: BASE64_ERROR.as_str().to_string(),
            });
        }
        if let Some(text) = value.as_str() {
            if text.len() % 4 != 0 {
                return Err(BASE64.failure(text));
            }
        }
        BASE64.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}

/// SHA-256 digest as 64 hex characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash;

impl Sha256Hash {
    pub const EXAMPLE: &'static str =
        "617a48c7c8afe0521efdc03e5bb0ad9e655893e6b4b51f0e794d70fba132aacb";
}

impl FormatValidator for Sha256Hash {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        SHA256.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b64(s: &str) -> ValidationOutcome {
        Base64.validate(FieldValue::Text(s))
    }

    #[test]
    fn test_base64_accepts() {
        assert!(b64("").is_ok());
        assert!(b64("ey4uLn0=").is_ok());
        assert!(b64("YQ==").is_ok());
        assert!(b64("abcd").is_ok());
    }

    #[test]
    fn test_base64_length_checked_first() {
        let err = b64("ab").unwrap_err();
        assert_eq!(err.to_string(), "Value is not a valid base64 encoding");
        assert_eq!(err.input(), "ab");
        assert!(b64("abcde").is_err());
    }

    #[test]
    fn test_base64_grammar() {
        assert!(b64("ab!d").is_err());
        assert!(b64("a===").is_err());
        assert!(b64("=abc").is_err());
    }

    #[test]
    fn test_base64_null() {
        let err = Base64.validate(FieldValue::Null).unwrap_err();
        assert_eq!(err.to_string(), "Value is not a valid base64 encoding");
    }

    #[test]
    fn test_sha256() {
        let ok = |s: &str| Sha256Hash.validate(FieldValue::Text(s)).is_ok();
        assert!(ok(Sha256Hash::EXAMPLE));
        assert!(ok(&Sha256Hash::EXAMPLE.to_uppercase()));
        assert!(!ok(&Sha256Hash::EXAMPLE[1..]));
        assert!(!ok(&format!("{}0", Sha256Hash::EXAMPLE)));
        assert!(!ok(&"g".repeat(64)));
        // Known looseness of the grammar.
        assert!(ok(&"+/".repeat(32)));
    }
}
