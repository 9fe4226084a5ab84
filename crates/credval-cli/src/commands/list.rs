//! List command - show supported field types

use anyhow::Result;
use console::style;
use credval_cli::{OutputFormat, Settings};
use credval_formats::catalog;
use serde_json::json;

pub fn show(settings: &Settings) -> Result<()> {
    match settings.output {
        OutputFormat::Json => {
            let entries: Vec<_> = catalog()
                .iter()
                .map(|entry| {
                    json!({
                        "field_type": entry.field_type(),
                        "expects": entry.validator().expects(),
                        "description": entry.field_type().description(),
                        "example": entry.example().to_json(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Text => {
            println!("{}", style("Field Types").bold().underlined());
            for entry in catalog().iter() {
                println!(
                    "  {:<22} {}",
                    style(entry.field_type()).cyan(),
                    entry.field_type().description()
                );
                println!("  {:<22} e.g. {}", "", style(entry.example()).dim());
            }
        }
    }
    Ok(())
}
