//! Indy identifier validators
//!
//! DIDs, schema identifiers and credential definition identifiers share the
//! base58 DID prefix; versions and predicates are plain grammars.

use credval_core::strategy::{MessageTemplate, OneOfValidator, RegexValidator};
use credval_core::{Example, FieldValue, FormatValidator, ValidationOutcome, ValueKind};
use once_cell::sync::Lazy;

/// Base58 alphabet (no `0`, `O`, `I` or `l`)
pub const B58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn did_class() -> String {
    format!("[{}]{{21,22}}", B58)
}

fn schema_id_body() -> String {
    format!("{}:2:.+:[0-9.]+", did_class())
}

static DID: Lazy<RegexValidator> = Lazy::new(|| {
    RegexValidator::new(
        &format!("^{}$", did_class()),
        MessageTemplate::new("Value {input} is not an indy decentralized identifier (DID)."),
    )
    .expect("indy did regex")
});

static SCHEMA_ID: Lazy<RegexValidator> = Lazy::new(|| {
    RegexValidator::new(
        &format!("^{}$", schema_id_body()),
        MessageTemplate::new("Value {input} is not an indy schema identifier."),
    )
    .expect("indy schema id regex")
});

static CRED_DEF_ID: Lazy<RegexValidator> = Lazy::new(|| {
    let pattern = format!(
        concat!(
            // issuer DID
            "^({did})",
            // cred def marker
            ":3",
            // signature type
            ":CL",
            // schema seq_no or schema id
            ":(([1-9][0-9]*)|({schema}))",
            // tag
            "(.+)?$",
        ),
        did = did_class(),
        schema = schema_id_body(),
    );
    RegexValidator::new(
        &pattern,
        MessageTemplate::new("Value {input} is not an indy credential definition identifier."),
    )
    .expect("indy cred def id regex")
});

static VERSION: Lazy<RegexValidator> = Lazy::new(|| {
    RegexValidator::new(
        r"^[0-9.]+$",
        MessageTemplate::new("Value {input} is not an indy version (use only digits and '.')."),
    )
    .expect("indy version regex")
});

/// Comparison operators usable in proof request predicates
pub const PREDICATES: &[&str] = &["<", "<=", ">=", ">"];

static PREDICATE: OneOfValidator = OneOfValidator::new(
    PREDICATES,
    MessageTemplate::new("Value {input} must be one of {choices}."),
);

/// Indy DID: 21 or 22 base58 characters
#[derive(Debug, Clone, Copy, Default)]
pub struct IndyDid;

impl IndyDid {
    pub const EXAMPLE: &'static str = "WgWxqztrNooG92RXvxSTWv";
}

impl FormatValidator for IndyDid {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        DID.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}

/// Schema identifier: `<did>:2:<name>:<version>`
#[derive(Debug, Clone, Copy, Default)]
pub struct IndySchemaId;

impl IndySchemaId {
    pub const EXAMPLE: &'static str = "WgWxqztrNooG92RXvxSTWv:2:schema_name:1.0";
}

impl FormatValidator for IndySchemaId {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        SCHEMA_ID.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}

/// Credential definition identifier: `<did>:3:CL:<seq_no | schema id>[tag]`
///
/// The trailing tag is unrestricted; in practice it is `:<tag>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndyCredDefId;

impl IndyCredDefId {
    pub const EXAMPLE: &'static str = "WgWxqztrNooG92RXvxSTWv:3:CL:20:tag";
}

impl FormatValidator for IndyCredDefId {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        CRED_DEF_ID.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}

/// Version string made of digits and dots
#[derive(Debug, Clone, Copy, Default)]
pub struct IndyVersion;

impl IndyVersion {
    pub const EXAMPLE: &'static str = "1.0";
}

impl FormatValidator for IndyVersion {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        VERSION.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}

/// Predicate operator: one of `<`, `<=`, `>=`, `>`
#[derive(Debug, Clone, Copy, Default)]
pub struct IndyPredicate;

impl IndyPredicate {
    pub const EXAMPLE: &'static str = ">=";
}

impl FormatValidator for IndyPredicate {
    fn expects(&self) -> ValueKind {
        ValueKind::String
    }

    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        PREDICATE.check(&value)
    }

    fn example(&self) -> Example {
        Example::text(Self::EXAMPLE)
    }
}
