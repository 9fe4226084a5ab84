//! credval CLI
//!
//! Command-line interface for checking credential message fields against
//! the credval format validators.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use credval_cli::{OutputFormat, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "credval")]
#[command(author, version, about = "credval: field-format validation for credential messages", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to ./credval.toml when present)
    #[arg(long, global = true, env = "CREDVAL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single value
    Check {
        /// Field type name (e.g. indy_did, int_epoch)
        field_type: String,

        /// Value to validate (may start with '-', e.g. -1)
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Parse VALUE as a JSON literal instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON array of {name, field_type, value} records
    CheckFile {
        /// Input file
        file: PathBuf,
    },

    /// List supported field types
    List,

    /// Print the example table as JSON
    Examples,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                format!(
                    "credval={0},credval_cli={0},credval_formats={0}",
                    log_level
                )
            }),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(output) = cli.output {
        settings.output = output;
    }
    console::set_colors_enabled(settings.color);
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Check {
            field_type,
            value,
            json,
        } => commands::check::value(&settings, &field_type, &value, json)?,
        Commands::CheckFile { file } => commands::check::file(&settings, &file)?,
        Commands::List => commands::list::show(&settings)?,
        Commands::Examples => commands::examples::show()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_negative_value() {
        let cli = Cli::try_parse_from(["credval", "check", "int_epoch", "-1"]).unwrap();
        match cli.command {
            Commands::Check {
                field_type,
                value,
                json,
            } => {
                assert_eq!(field_type, "int_epoch");
                assert_eq!(value, "-1");
                assert!(!json);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_accepts_negative_json_value() {
        let cli = Cli::try_parse_from(["credval", "check", "--json", "int_epoch", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check { ref value, json: true, .. } if value == "-5"
        ));
    }

    #[test]
    fn test_rejection_error_does_not_repeat_reason() {
        let settings = Settings::default();
        let err = commands::check::value(&settings, "int_epoch", "-1", false).unwrap_err();
        assert_eq!(err.to_string(), "validation failed");
        assert!(commands::check::value(&settings, "int_epoch", "0", false).is_ok());
    }
}
