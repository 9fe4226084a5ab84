//! credval CLI support
//!
//! Settings and batch-checking logic shared by the `credval` binary and its
//! integration tests.

pub mod batch;
pub mod input;
pub mod settings;

pub use batch::{check_all, BatchReport, FieldCheck, FieldFailure};
pub use input::InputValue;
pub use settings::{OutputFormat, Settings};
