//! The validator abstraction

use serde_json::Value;

use crate::error::ValidationOutcome;
use crate::example::Example;
use crate::value::{FieldValue, ValueKind};

/// A stateless predicate certifying that a field value is well-formed
///
/// Implementations hold no mutable state, so one instance may be shared
/// across any number of threads. Every validator carries a canonical
/// example that must pass its own check.
pub trait FormatValidator: std::fmt::Debug + Send + Sync {
    /// Kind of value this validator accepts
    fn expects(&self) -> ValueKind;

    /// Check a value, returning the reason when it is rejected
    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome;

    /// Example value used for documentation and tooling
    fn example(&self) -> Example;

    /// Check a JSON value as it would appear in a message field
    fn validate_json(&self, value: &Value) -> ValidationOutcome {
        self.validate(FieldValue::from(value))
    }

    /// Shorthand for `validate(..).is_ok()`
    fn is_valid(&self, value: FieldValue<'_>) -> bool {
        self.validate(value).is_ok()
    }
}

impl<V: FormatValidator + ?Sized> FormatValidator for Box<V> {
    fn expects(&self) -> ValueKind {
        (**self).expects()
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        (**self).validate(value)
    }

    fn example(&self) -> Example {
        (**self).example()
    }
}
