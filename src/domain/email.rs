//! EmailAddress value object.

use super::errors::ValidationError;
use super::formatters::format_email;
use super::validators::validate_email;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A client email address that passed validation.
///
/// The stored value is normalised (trimmed, lower-cased), so two
/// addresses that differ only in case compare equal.
///
/// # Example
///
/// ```
/// use client_data_compiler::domain::EmailAddress;
///
/// let email = EmailAddress::new(" Juan@Gmail.com ").unwrap();
/// assert_eq!(email.as_str(), "juan@gmail.com");
/// assert_eq!(email.domain(), "gmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalise an email address.
    ///
    /// # Errors
    ///
    /// `EmptyField`, `InvalidFormat` or `DomainNotAllowed`, as reported by
    /// [`validate_email`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = email.as_ref();
        validate_email(email)?;
        Ok(Self(format_email(email)))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
