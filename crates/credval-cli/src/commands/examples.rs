//! Examples command - dump the example table for documentation tooling

use anyhow::Result;
use credval_formats::catalog;

pub fn show() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&catalog().examples())?);
    Ok(())
}
