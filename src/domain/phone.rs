//! PhoneNumber value object.

use super::errors::ValidationError;
use super::formatters::format_phone;
use super::rules::{digits_only, PHONE_PREFIX_LEN};
use super::rules::trim_blank;
use super::validators::validate_phone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A client phone number that passed validation.
///
/// Keeps the trimmed value as entered; [`PhoneNumber::formatted`] gives the
/// `AAA-BBB-CCCC` rendering.
///
/// # Example
///
/// ```
/// use client_data_compiler::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(961) 123 4567").unwrap();
/// assert_eq!(phone.digits_only(), "9611234567");
/// assert_eq!(phone.formatted(), "961-123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate a phone number.
    ///
    /// # Errors
    ///
    /// `EmptyField`, `TooShort` or `PrefixNotAllowed`, as reported by
    /// [`validate_phone`].
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref();
        validate_phone(phone)?;
        Ok(Self(trim_blank(phone).to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        digits_only(&self.0)
    }

    /// The regional prefix (first three digits).
    pub fn prefix(&self) -> String {
        self.digits_only()[..PHONE_PREFIX_LEN].to_string()
    }

    /// Display rendering, see [`format_phone`].
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new(" 961-123-4567 ").unwrap();
        assert_eq!(phone.as_str(), "961-123-4567");
        assert_eq!(phone.prefix(), "961");
    }

    #[test]
    fn test_phone_rejections() {
        assert_eq!(PhoneNumber::new("96112345"), Err(ValidationError::TooShort));
        assert_eq!(
            PhoneNumber::new("555 123 4567"),
            Err(ValidationError::PrefixNotAllowed)
        );
    }

    #[test]
    fn test_phone_formatted_keeps_long_numbers() {
        let phone = PhoneNumber::new("961 123 45678").unwrap();
        assert_eq!(phone.formatted(), "961 123 45678");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<PhoneNumber, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
