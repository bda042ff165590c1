//! Field validation errors.

use super::field::ClientField;
use super::rules::{allowed_domains_list, allowed_prefixes_list};
use thiserror::Error;

/// Reasons a single client field can fail validation.
///
/// The `Display` output is the message shown to the user, so it includes
/// the literal allow-lists where relevant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Required value missing or blank after trimming.
    #[error("{}", empty_message(.0))]
    EmptyField(ClientField),

    /// Key contains non-digit characters.
    #[error("La clave debe ser un número válido")]
    NotNumeric,

    /// Name contains characters outside the allowed set.
    #[error("El nombre solo puede contener letras y espacios")]
    InvalidCharacters,

    /// Email does not match the basic address shape.
    #[error("El formato del correo no es válido")]
    InvalidFormat,

    /// Email domain is not in the allow-list.
    #[error("Dominio no permitido. Use: {}", allowed_domains_list())]
    DomainNotAllowed,

    /// Phone has fewer than ten digits.
    #[error("El teléfono debe tener al menos 10 dígitos")]
    TooShort,

    /// Phone's leading three digits are not an allowed regional prefix.
    #[error("Lada no válida para Chiapas. Use: {}", allowed_prefixes_list())]
    PrefixNotAllowed,
}

fn empty_message(field: &ClientField) -> &'static str {
    match field {
        ClientField::Key => "La clave no puede estar vacía",
        ClientField::Name => "El nombre no puede estar vacío",
        ClientField::Email => "El correo no puede estar vacío",
        ClientField::Phone => "El teléfono no puede estar vacío",
    }
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> ClientField {
        match self {
            Self::EmptyField(field) => *field,
            Self::NotNumeric => ClientField::Key,
            Self::InvalidCharacters => ClientField::Name,
            Self::InvalidFormat | Self::DomainNotAllowed => ClientField::Email,
            Self::TooShort | Self::PrefixNotAllowed => ClientField::Phone,
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyField(_) => "empty_field",
            Self::NotNumeric => "not_numeric",
            Self::InvalidCharacters => "invalid_characters",
            Self::InvalidFormat => "invalid_format",
            Self::DomainNotAllowed => "domain_not_allowed",
            Self::TooShort => "too_short",
            Self::PrefixNotAllowed => "prefix_not_allowed",
        }
    }
}
