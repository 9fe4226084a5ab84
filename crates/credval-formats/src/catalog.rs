//! Validator catalog
//!
//! Associates each [`FieldType`] with its validator and a documentation
//! example. The catalog is built once on first access and never mutated,
//! so it can be read from any thread without coordination.

use std::collections::BTreeMap;

use credval_core::{Example, FieldValue, FormatValidator, ValidationOutcome};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::datetime::IndyIso8601DateTime;
use crate::encoding::{Base64, Sha256Hash};
use crate::epoch::IntEpoch;
use crate::field::{FieldType, UnknownFieldType};
use crate::indy::{IndyCredDefId, IndyDid, IndyPredicate, IndySchemaId, IndyVersion};

static CATALOG: Lazy<ValidatorCatalog> = Lazy::new(ValidatorCatalog::standard);

/// The process-wide catalog
pub fn catalog() -> &'static ValidatorCatalog {
    &CATALOG
}

/// A field type paired with its validator and example
#[derive(Debug)]
pub struct CatalogEntry {
    field_type: FieldType,
    validator: Box<dyn FormatValidator>,
    example: Example,
}

impl CatalogEntry {
    fn new(field_type: FieldType, validator: Box<dyn FormatValidator>) -> Self {
        let example = validator.example();
        Self {
            field_type,
            validator,
            example,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn validator(&self) -> &dyn FormatValidator {
        self.validator.as_ref()
    }

    pub fn example(&self) -> &Example {
        &self.example
    }

    pub fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        let outcome = self.validator.validate(value);
        if let Err(err) = &outcome {
            tracing::trace!(field_type = %self.field_type, error = %err, "value rejected");
        }
        outcome
    }

    pub fn validate_json(&self, value: &Value) -> ValidationOutcome {
        self.validate(FieldValue::from(value))
    }
}

/// Immutable table of validators keyed by field type
#[derive(Debug)]
pub struct ValidatorCatalog {
    // Indexed by `FieldType::index`.
    entries: Vec<CatalogEntry>,
}

impl ValidatorCatalog {
    /// Build the catalog with every standard validator
    pub fn standard() -> Self {
        let entries: Vec<CatalogEntry> = FieldType::ALL
            .into_iter()
            .map(|ft| CatalogEntry::new(ft, Self::validator_for(ft)))
            .collect();
        tracing::debug!(entries = entries.len(), "validator catalog initialized");
        Self { entries }
    }

    fn validator_for(field_type: FieldType) -> Box<dyn FormatValidator> {
        match field_type {
            FieldType::IntEpoch => Box::new(IntEpoch),
            FieldType::IndyDid => Box::new(IndyDid),
            FieldType::IndyCredDefId => Box::new(IndyCredDefId),
            FieldType::IndyVersion => Box::new(IndyVersion),
            FieldType::IndySchemaId => Box::new(IndySchemaId),
            FieldType::IndyPredicate => Box::new(IndyPredicate),
            FieldType::IndyIso8601DateTime => Box::new(IndyIso8601DateTime),
            FieldType::Base64 => Box::new(Base64),
            FieldType::Sha256 => Box::new(Sha256Hash),
        }
    }

    pub fn get(&self, field_type: FieldType) -> &CatalogEntry {
        &self.entries[field_type.index()]
    }

    /// Look up an entry by its symbolic name (e.g. `"indy_did"`)
    pub fn lookup(&self, name: &str) -> Result<&CatalogEntry, UnknownFieldType> {
        let field_type: FieldType = name.parse()?;
        Ok(self.get(field_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Example value per field type name, for documentation generation
    pub fn examples(&self) -> BTreeMap<&'static str, Example> {
        self.iter()
            .map(|entry| (entry.field_type.as_str(), entry.example.clone()))
            .collect()
    }
}
