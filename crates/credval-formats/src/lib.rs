//! credval Formats
//!
//! Concrete field-format validators for Indy-style credential messages,
//! and the catalog that maps symbolic field types to them.

pub mod catalog;
pub mod datetime;
pub mod encoding;
pub mod epoch;
pub mod field;
pub mod indy;

pub use catalog::{catalog, CatalogEntry, ValidatorCatalog};
pub use datetime::IndyIso8601DateTime;
pub use encoding::{Base64, Sha256Hash};
pub use epoch::IntEpoch;
pub use field::{FieldType, UnknownFieldType};
pub use indy::{IndyCredDefId, IndyDid, IndyPredicate, IndySchemaId, IndyVersion, B58};
