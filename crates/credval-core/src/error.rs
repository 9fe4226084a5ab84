//! Error types for credval

use thiserror::Error;

use crate::value::ValueKind;

/// Result of running a validator: `Ok(())` when the value is accepted
pub type ValidationOutcome = Result<(), ValidationError>;

/// Reason a value was rejected by a validator
///
/// Messages are meant for people. Callers should branch on the variant,
/// never on the rendered text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not match the expected grammar or range
    #[error("{message}")]
    Format { input: String, message: String },

    /// The value is not one of an enumerated set of choices
    #[error("{message}")]
    NotOneOf {
        input: String,
        choices: Vec<String>,
        message: String,
    },

    /// The value is of the wrong kind (e.g. text given to a numeric check)
    #[error("Value {input} is not {expected}.")]
    UnexpectedType { input: String, expected: ValueKind },
}

impl ValidationError {
    /// The rejected value, as rendered for the message
    pub fn input(&self) -> &str {
        match self {
            ValidationError::Format { input, .. }
            | ValidationError::NotOneOf { input, .. }
            | ValidationError::UnexpectedType { input, .. } => input,
        }
    }

    /// Acceptable choices, for enumerated-choice failures
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            ValidationError::NotOneOf { choices, .. } => Some(choices),
            _ => None,
        }
    }
}
