//! ClientField identifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One of the four fields of a client record.
///
/// Ordering follows the column order of the upload template
/// (clave, nombre, correo, telefono), which is also the order in which
/// errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientField {
    /// Numeric client key (`clave`)
    Key,

    /// Full name (`nombre`)
    Name,

    /// Email address (`correo`)
    Email,

    /// Phone number (`telefono`)
    Phone,
}

impl ClientField {
    /// All fields in reporting order.
    pub const ALL: [ClientField; 4] = [Self::Key, Self::Name, Self::Email, Self::Phone];

    /// English identifier (`key`, `name`, `email`, `phone`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Name used by the remote API (`clave`, `nombre`, `correo`, `telefono`).
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Key => "clave",
            Self::Name => "nombre",
            Self::Email => "correo",
            Self::Phone => "telefono",
        }
    }

    /// Human label shown next to a field's errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Key => "Clave",
            Self::Name => "Nombre",
            Self::Email => "Correo Electrónico",
            Self::Phone => "Teléfono",
        }
    }

    /// Resolve either the English or the wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "key" | "clave" => Some(Self::Key),
            "name" | "nombre" => Some(Self::Name),
            "email" | "correo" => Some(Self::Email),
            "phone" | "telefono" => Some(Self::Phone),
            _ => None,
        }
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown client field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ClientField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Serialized with the wire name so error maps line up with server payloads
impl Serialize for ClientField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for ClientField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
