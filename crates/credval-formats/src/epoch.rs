//! Integer epoch validator

use credval_core::strategy::{MessageTemplate, RangeValidator};
use credval_core::time::current_epoch;
use credval_core::{Example, FieldValue, FormatValidator, ValidationOutcome, ValueKind};
use once_cell::sync::Lazy;

/// Smallest accepted epoch second
pub const EPOCH_MIN: i64 = 0;

/// Largest accepted epoch second (2038-01-19T03:14:07Z)
pub const EPOCH_MAX: i64 = 2147483647;

const ERROR: MessageTemplate =
    MessageTemplate::new("Value {input} is not a valid integer epoch time.");

static RANGE: Lazy<RangeValidator> = Lazy::new(|| RangeValidator::new(EPOCH_MIN, EPOCH_MAX, ERROR));

// Captured once so time-based examples stay stable for the process lifetime.
static PROCESS_EPOCH: Lazy<i64> = Lazy::new(|| current_epoch().clamp(EPOCH_MIN, EPOCH_MAX));

/// Epoch second at which this process first asked for an example
pub fn process_epoch() -> i64 {
    *PROCESS_EPOCH
}

/// Validates integer epoch seconds in `0..=2147483647`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntEpoch;

impl FormatValidator for IntEpoch {
    fn expects(&self) -> ValueKind {
        ValueKind::Integer
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        RANGE.check(&value)
    }

    fn example(&self) -> Example {
        Example::Int(process_epoch())
    }
}
