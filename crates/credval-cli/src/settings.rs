//! CLI settings
//!
//! Loaded from an optional `credval.toml` (or the file named by `--config`)
//! with `CREDVAL_*` environment variables layered on top.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format for command results
    pub output: OutputFormat,

    /// Colorize text output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            color: true,
        }
    }
}

impl Settings {
    /// Default settings file name, looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "credval";

    /// Environment variable prefix (`CREDVAL_OUTPUT`, `CREDVAL_COLOR`)
    pub const ENV_PREFIX: &'static str = "CREDVAL";

    /// Load settings; an explicit path must exist, the default file may not
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(Self::DEFAULT_FILE).required(false),
        };
        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(Self::ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Load from a file only, ignoring the environment
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }
}
