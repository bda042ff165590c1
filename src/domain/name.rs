//! ClientName value object.

use super::errors::ValidationError;
use super::formatters::format_name;
use super::validators::validate_name;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated client name, stored title-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientName(String);

impl ClientName {
    /// Validate and title-case a name.
    ///
    /// # Errors
    ///
    /// `EmptyField` or `InvalidCharacters`.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref();
        validate_name(name)?;
        Ok(Self(format_name(name)))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ClientName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClientName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ClientName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ClientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_title_cased() {
        let name = ClientName::new("  ana   maría LÓPEZ ").unwrap();
        assert_eq!(name.as_str(), "Ana María López");
    }

    #[test]
    fn test_name_rejects_digits() {
        assert_eq!(ClientName::new("R2D2"), Err(ValidationError::InvalidCharacters));
    }
}
