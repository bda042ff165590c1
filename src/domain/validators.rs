//! Field and record validators.
//!
//! Every validator is a pure function over `&str`. Malformed input is an
//! ordinary `Err` verdict, never a panic, so callers can run these on every
//! keystroke and on every row of a bulk upload.

use super::errors::ValidationError;
use super::field::ClientField;
use super::record::ClientRecord;
use super::rules::{
    digits_only, is_allowed_domain, is_allowed_prefix, EMAIL_SHAPE, LETTERS_ONLY,
    MIN_PHONE_DIGITS, NUMBERS_ONLY, PHONE_PREFIX_LEN, trim_blank,
};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Outcome of validating one field: `Ok(())` when it passes.
pub type FieldVerdict = Result<(), ValidationError>;

/// Validate a client key: non-empty and ASCII digits only once trimmed.
pub fn validate_key(value: &str) -> FieldVerdict {
    let key = trim_blank(value);
    if key.is_empty() {
        return Err(ValidationError::EmptyField(ClientField::Key));
    }
    if !NUMBERS_ONLY.is_match(key) {
        return Err(ValidationError::NotNumeric);
    }
    Ok(())
}

/// Validate a name: letters (accent-aware), whitespace, `.`, `'` and `-`.
pub fn validate_name(value: &str) -> FieldVerdict {
    let name = trim_blank(value);
    if name.is_empty() {
        return Err(ValidationError::EmptyField(ClientField::Name));
    }
    if !LETTERS_ONLY.is_match(name) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}

/// Validate an email: address shape, then exact membership of the domain
/// in the allow-list. Comparison is case-insensitive.
pub fn validate_email(value: &str) -> FieldVerdict {
    let email = trim_blank(value).to_lowercase();
    if email.is_empty() {
        return Err(ValidationError::EmptyField(ClientField::Email));
    }
    if !EMAIL_SHAPE.is_match(&email) {
        return Err(ValidationError::InvalidFormat);
    }

    // The shape check guarantees exactly one '@'
    let domain = email.rsplit('@').next().unwrap_or_default();
    if !is_allowed_domain(domain) {
        return Err(ValidationError::DomainNotAllowed);
    }
    Ok(())
}

/// Validate a phone: at least ten digits once formatting is stripped, with
/// an allowed regional prefix. Longer numbers are judged on their first
/// three digits.
pub fn validate_phone(value: &str) -> FieldVerdict {
    if trim_blank(value).is_empty() {
        return Err(ValidationError::EmptyField(ClientField::Phone));
    }

    let digits = digits_only(value);
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::TooShort);
    }
    if !is_allowed_prefix(&digits[..PHONE_PREFIX_LEN]) {
        return Err(ValidationError::PrefixNotAllowed);
    }
    Ok(())
}

/// Run the validator that belongs to `field`.
pub fn validate_field(field: ClientField, value: &str) -> FieldVerdict {
    match field {
        ClientField::Key => validate_key(value),
        ClientField::Name => validate_name(value),
        ClientField::Email => validate_email(value),
        ClientField::Phone => validate_phone(value),
    }
}

/// Validate all four fields of a record.
///
/// Every field is checked even when an earlier one fails, so the result
/// always lists all problems at once.
pub fn validate_record(record: &ClientRecord) -> ValidationResult {
    ClientField::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, record.get(field))
                .err()
                .map(|err| (field, err))
        })
        .collect()
}

/// Record-level verdict: the failing fields and why.
///
/// Serializes as `{"is_valid": bool, "errors": {"clave": "...", ...}}`,
/// the same shape the remote API returns per client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<ClientField, ValidationError>,
}

impl ValidationResult {
    /// True when no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failure for `field`, if any.
    pub fn error(&self, field: ClientField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Whether `field` failed.
    pub fn has_error(&self, field: ClientField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failing fields and their errors, in field order.
    pub fn errors(&self) -> &BTreeMap<ClientField, ValidationError> {
        &self.errors
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// User-facing messages keyed by field.
    pub fn messages(&self) -> BTreeMap<ClientField, String> {
        self.errors
            .iter()
            .map(|(field, err)| (*field, err.to_string()))
            .collect()
    }

    /// Messages prefixed with the field label, e.g. `"Clave: La clave debe ser un número válido"`.
    pub fn labeled_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(field, err)| format!("{}: {}", field.label(), err))
            .collect()
    }
}

impl FromIterator<(ClientField, ValidationError)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (ClientField, ValidationError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("is_valid", &self.is_valid())?;
        map.serialize_entry("errors", &self.messages())?;
        map.end()
    }
}
