//! ClientKey value object.

use super::errors::ValidationError;
use super::formatters::format_key;
use super::validators::validate_key;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A numeric client key (`clave`).
///
/// Leading zeros are significant: `"007"` and `"7"` are different keys.
///
/// # Example
///
/// ```
/// use client_data_compiler::domain::ClientKey;
///
/// let key = ClientKey::new(" 1001 ").unwrap();
/// assert_eq!(key.as_str(), "1001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientKey(String);

impl ClientKey {
    /// Create a new ClientKey from a trimmed, digits-only value.
    ///
    /// # Errors
    ///
    /// `EmptyField` or `NotNumeric`.
    pub fn new(key: impl AsRef<str>) -> Result<Self, ValidationError> {
        let key = key.as_ref();
        validate_key(key)?;
        Ok(Self(format_key(key)))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ClientKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClientKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClientKey::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
