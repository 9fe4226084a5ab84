//! credval Core
//!
//! The validator abstraction shared by every credval format check.
//! This crate defines the value view, the outcome and error types, and
//! the reusable matching strategies that concrete validators build on.

pub mod error;
pub mod example;
pub mod strategy;
pub mod time;
pub mod validator;
pub mod value;

pub use error::{ValidationError, ValidationOutcome};
pub use example::Example;
pub use strategy::{MessageTemplate, OneOfValidator, RangeValidator, RegexValidator};
pub use validator::FormatValidator;
pub use value::{FieldValue, ValueKind};
