//! CLI command implementations

pub mod check;
pub mod examples;
pub mod list;
