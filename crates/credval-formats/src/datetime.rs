//! ISO 8601 datetime validator, Indy profile
//!
//! The check is purely syntactic: `2021-13-01T00:00:00Z` is accepted because
//! the grammar does not know how many months a year has.

use credval_core::strategy::{MessageTemplate, RegexValidator};
use credval_core::time::epoch_to_str;
use credval_core::{Example, FieldValue, FormatValidator, ValidationOutcome, ValueKind};
use once_cell::sync::Lazy;

use crate::epoch::process_epoch;

static ISO8601: Lazy<RegexValidator> = Lazy::new(|| {
    RegexValidator::new(
        concat!(
            r"^([0-9]{4})-([0-9]{2})-([0-9]{2})[T ]([0-9]{2}):([0-9]{2})",
            r"(?::([0-9]{2}(?:\.[0-9]{1,6})?))?([+-][0-9]{2}:?[0-9]{2}|Z)$",
        ),
        MessageTemplate::new("Value {input} is not a date in valid format."),
    )
    .expect("iso 8601 regex")
});

const FALLBACK_EXAMPLE: &str = "2021-01-01 00:00:00Z";

/// `YYYY-MM-DD[T ]HH:MM[:SS[.ffffff]](±HH[:]MM|Z)`
#[derive(Debug, Clone, Copy, Default)]
pub struct IndyIso8601DateTime;

impl FormatValidator for IndyIso8601DateTime {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        ISO8601.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(
            epoch_to_str(process_epoch()).unwrap_or_else(|| FALLBACK_EXAMPLE.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> bool {
        IndyIso8601DateTime.validate(FieldValue::Text(s)).is_ok()
    }

    #[test]
    fn test_accepted_forms() {
        assert!(ok("2021-01-01T00:00:00Z"));
        assert!(ok("2021-01-01T00:00:00.123456+05:30"));
        assert!(ok("2021-01-01 00:00Z"));
        assert!(ok("2021-01-01T00:00:00.1-0800"));
        assert!(ok(FALLBACK_EXAMPLE));
    }

    #[test]
    fn test_rejected_forms() {
        assert!(!ok("2021-01-01"));
        assert!(!ok("2021-01-01T00:00:00"));
        assert!(!ok("2021-01-01T00:00:00.1234567Z"));
        assert!(!ok("2021-01-01T00:00:00+5:30"));
        assert!(!ok("2021/01/01T00:00:00Z"));
        assert!(!ok("2021-01-01t00:00:00Z"));
    }

    #[test]
    fn test_syntactic_only() {
        // Calendar validity is out of scope for this grammar.
        assert!(ok("2021-13-01T00:00:00Z"));
        assert!(ok("2021-02-31T25:61:61Z"));
    }

    #[test]
    fn test_error_message() {
        let err = IndyIso8601DateTime
            .validate(FieldValue::Text("yesterday"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value yesterday is not a date in valid format."
        );
    }
}
