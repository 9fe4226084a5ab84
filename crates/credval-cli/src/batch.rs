//! Batch field checking
//!
//! Validates a list of `{name, field_type, value}` records and collects every
//! failure instead of stopping at the first one.

use credval_formats::ValidatorCatalog;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One field to check
#[derive(Debug, Clone, Deserialize)]
pub struct FieldCheck {
    /// Label used in reports; defaults to the record's position
    #[serde(default)]
    pub name: Option<String>,

    /// Symbolic field type, e.g. `indy_did`
    pub field_type: String,

    /// Raw field value
    pub value: Value,
}

/// A rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub name: String,
    pub field_type: String,
    pub message: String,
}

/// Result of checking a batch
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub checked: usize,
    pub failures: Vec<FieldFailure>,
}

impl BatchReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check every record against the catalog
pub fn check_all(checks: &[FieldCheck], catalog: &ValidatorCatalog) -> BatchReport {
    let failures = checks
        .iter()
        .enumerate()
        .filter_map(|(index, check)| {
            let outcome = match catalog.lookup(&check.field_type) {
                Ok(entry) => entry.validate_json(&check.value).map_err(|e| e.to_string()),
                Err(unknown) => Err(unknown.to_string()),
            };
            outcome.err().map(|message| FieldFailure {
                name: check
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", index)),
                field_type: check.field_type.clone(),
                message,
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(checked = checks.len(), failed = failures.len(), "batch checked");

    BatchReport {
        checked: checks.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credval_formats::catalog;
    use serde_json::json;

    fn checks(value: Value) -> Vec<FieldCheck> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_all_valid() {
        let report = check_all(
            &checks(json!([
                {"name": "issuer_did", "field_type": "indy_did", "value": "WgWxqztrNooG92RXvxSTWv"},
                {"field_type": "int_epoch", "value": 0},
            ])),
            catalog(),
        );
        assert_eq!(report.checked, 2);
        assert!(report.is_ok());
    }

    #[test]
    fn test_failures_are_aggregated() {
        let report = check_all(
            &checks(json!([
                {"name": "version", "field_type": "indy_version", "value": "1.0-beta"},
                {"field_type": "indy_predicate", "value": ">="},
                {"field_type": "base64", "value": "ab"},
                {"name": "mystery", "field_type": "nope", "value": 1},
            ])),
            catalog(),
        );
        assert_eq!(report.checked, 4);
        assert_eq!(report.failures.len(), 3);
        assert_eq!(report.failures[0].name, "version");
        assert_eq!(report.failures[1].name, "#2");
        assert_eq!(report.failures[1].message, "Value is not a valid base64 encoding");
        assert_eq!(report.failures[2].message, "Unknown field type: nope");
    }
}
