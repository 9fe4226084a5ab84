//! Symbolic field types used by message schemas

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field type name that no catalog entry answers to
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field type: {0}")]
pub struct UnknownFieldType(pub String);

/// Field types with a registered validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    IntEpoch,
    IndyDid,
    IndyCredDefId,
    IndyVersion,
    IndySchemaId,
    IndyPredicate,
    #[serde(rename = "indy_iso8601_datetime")]
    IndyIso8601DateTime,
    Base64,
    Sha256,
}

impl FieldType {
    /// All field types, in catalog order
    pub const ALL: [FieldType; 9] = [
        FieldType::IntEpoch,
        FieldType::IndyDid,
        FieldType::IndyCredDefId,
        FieldType::IndyVersion,
        FieldType::IndySchemaId,
        FieldType::IndyPredicate,
        FieldType::IndyIso8601DateTime,
        FieldType::Base64,
        FieldType::Sha256,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::IntEpoch => "int_epoch",
            FieldType::IndyDid => "indy_did",
            FieldType::IndyCredDefId => "indy_cred_def_id",
            FieldType::IndyVersion => "indy_version",
            FieldType::IndySchemaId => "indy_schema_id",
            FieldType::IndyPredicate => "indy_predicate",
            FieldType::IndyIso8601DateTime => "indy_iso8601_datetime",
            FieldType::Base64 => "base64",
            FieldType::Sha256 => "sha256",
        }
    }

    /// Short human description of the expected form
    pub fn description(&self) -> &'static str {
        match self {
            FieldType::IntEpoch => "Integer epoch seconds (0 to 2147483647)",
            FieldType::IndyDid => "Indy DID (21-22 base58 characters)",
            FieldType::IndyCredDefId => "Indy credential definition identifier",
            FieldType::IndyVersion => "Version made of digits and '.'",
            FieldType::IndySchemaId => "Indy schema identifier",
            FieldType::IndyPredicate => "Predicate operator (<, <=, >=, >)",
            FieldType::IndyIso8601DateTime => "ISO 8601 datetime, Indy profile",
            FieldType::Base64 => "Base64 encoding",
            FieldType::Sha256 => "Hex-encoded SHA-256 hash",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|ft| ft.as_str() == s)
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}
