//! ClientRecord: the four raw fields of a customer entry.

use super::field::ClientField;
use super::formatters;
use serde::{Deserialize, Serialize};

/// A customer record as typed into the form or read from a spreadsheet row.
///
/// Values are kept exactly as entered; use [`ClientRecord::normalized`]
/// to apply the display formatters. Serialized with the remote API's field
/// names, deserialized from either those or the English names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientRecord {
    /// Numeric client key
    #[serde(rename = "clave", alias = "key")]
    pub key: String,

    /// Full name
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,

    /// Email address
    #[serde(rename = "correo", alias = "email")]
    pub email: String,

    /// Phone number
    #[serde(rename = "telefono", alias = "phone")]
    pub phone: String,
}

impl ClientRecord {
    /// Create a record from its four raw values.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Raw value of a field.
    pub fn get(&self, field: ClientField) -> &str {
        match field {
            ClientField::Key => &self.key,
            ClientField::Name => &self.name,
            ClientField::Email => &self.email,
            ClientField::Phone => &self.phone,
        }
    }

    /// Replace the value of a field.
    pub fn set(&mut self, field: ClientField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ClientField::Key => self.key = value,
            ClientField::Name => self.name = value,
            ClientField::Email => self.email = value,
            ClientField::Phone => self.phone = value,
        }
    }

    /// Copy of this record with every field passed through its formatter.
    pub fn normalized(&self) -> Self {
        Self {
            key: formatters::format_key(&self.key),
            name: formatters::format_name(&self.name),
            email: formatters::format_email(&self.email),
            phone: formatters::format_phone(&self.phone),
        }
    }
}
