//! Check commands - validate one value or a batch file

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use console::style;
use credval_cli::{check_all, FieldCheck, InputValue, OutputFormat, Settings};
use credval_formats::catalog;
use serde_json::json;

/// Validate a single value given on the command line
pub fn value(settings: &Settings, field_type: &str, raw: &str, as_json: bool) -> Result<()> {
    let entry = catalog().lookup(field_type)?;

    let input = InputValue::parse(entry.validator().expects(), raw, as_json)
        .context("VALUE is not a JSON literal")?;

    let outcome = entry.validate(input.as_field_value());

    match settings.output {
        OutputFormat::Json => {
            let report = json!({
                "field_type": entry.field_type(),
                "value": raw,
                "valid": outcome.is_ok(),
                "error": outcome.as_ref().err().map(|e| e.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => match &outcome {
            Ok(()) => println!("{} {}: {}", style("✓").green(), entry.field_type(), raw),
            Err(err) => println!("{} {}: {}", style("✗").red(), entry.field_type(), err),
        },
    }

    // The reason was already printed above.
    if outcome.is_err() {
        bail!("validation failed");
    }
    Ok(())
}

/// Validate every record in a JSON batch file, reporting all failures
pub fn file(settings: &Settings, path: &Path) -> Result<()> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let checks: Vec<FieldCheck> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of field checks", path.display()))?;

    let report = check_all(&checks, catalog());

    match settings.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            for failure in &report.failures {
                println!(
                    "{} {} ({}): {}",
                    style("✗").red(),
                    style(&failure.name).bold(),
                    failure.field_type,
                    failure.message
                );
            }
            if report.is_ok() {
                println!("{} {} checked, none failed", style("✓").green(), report.checked);
            }
        }
    }

    if !report.is_ok() {
        bail!(
            "{} of {} fields failed validation",
            report.failures.len(),
            report.checked
        );
    }
    Ok(())
}
