//! Client record validation and normalisation.
//!
//! This module holds the ruleset shared by form entry, bulk-upload preview
//! and bulk re-validation: the fixed allow-lists, the per-field validators,
//! the record-level aggregation, and the display formatters. Everything here
//! is pure and synchronous.
//!
//! Validated value objects (`ClientKey`, `ClientName`, `EmailAddress`,
//! `PhoneNumber`) wrap the validators for code that wants to carry proof of
//! validity in the type.

pub mod client_key;
pub mod email;
pub mod errors;
pub mod field;
pub mod formatters;
pub mod name;
pub mod phone;
pub mod record;
pub mod rules;
pub mod validated;
pub mod validators;

pub use client_key::ClientKey;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::{ClientField, UnknownField};
pub use formatters::{
    format_email, format_field, format_key, format_name, format_phone, sanitize_phone_input,
};
pub use name::ClientName;
pub use phone::PhoneNumber;
pub use record::ClientRecord;
pub use rules::{ALLOWED_EMAIL_DOMAINS, ALLOWED_PHONE_PREFIXES};
pub use validated::ValidatedClient;
pub use validators::{
    validate_email, validate_field, validate_key, validate_name, validate_phone, validate_record,
    FieldVerdict, ValidationResult,
};
