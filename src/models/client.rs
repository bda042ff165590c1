//! Client model: a record as stored and returned by the remote API.

use crate::domain::{validate_record, ClientField, ClientRecord, ValidationResult};
use chrono::{DateTime, Datelike, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Accept either a numeric or a string id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Text(String),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Num(n)) => n.to_string(),
        Some(RawId::Text(s)) => s,
        None => String::new(),
    })
}

/// A stored client, with the verdict the server computed for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Client {
    /// Server-assigned identifier
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Raw field values (`clave`, `nombre`, `correo`, `telefono`)
    #[serde(flatten)]
    pub record: ClientRecord,

    /// Whether every field passed server-side validation
    pub is_valid: bool,

    /// Server error messages keyed by wire field name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,

    /// When the client was created (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the client was last updated (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Client {
    /// Server error message for `field`, if any.
    pub fn error_for(&self, field: ClientField) -> Option<&str> {
        self.errors
            .get(field.wire_name())
            .or_else(|| self.errors.get(field.as_str()))
            .map(String::as_str)
    }

    /// Re-run the local ruleset on this client's values.
    pub fn revalidate(&self) -> ValidationResult {
        validate_record(&self.record)
    }

    /// Whether the local ruleset agrees with the server's verdict.
    pub fn verdict_matches_local(&self) -> bool {
        self.revalidate().is_valid() == self.is_valid
    }

    /// `created_at` rendered as `16 oct 2026, 14:05`, or as received if it
    /// cannot be parsed.
    pub fn created_display(&self) -> String {
        self.created_at.as_deref().map(format_date).unwrap_or_default()
    }
}

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Render an ISO 8601 timestamp as `16 oct 2026, 14:05`.
///
/// Timestamps with an offset keep their local wall-clock time. Unparseable
/// input is returned unchanged.
pub fn format_date(value: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"));

    match parsed {
        Ok(dt) => {
            let month = MONTHS_ES[dt.month0() as usize];
            format!("{} {} {}, {}", dt.day(), month, dt.year(), dt.format("%H:%M"))
        }
        Err(_) => value.to_string(),
    }
}

/// Query filters for listing clients. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilters {
    /// Free-text search over all fields
    pub search: Option<String>,

    /// Only clients with (true) or without (false) errors
    pub has_errors: Option<bool>,

    /// Only clients whose given field failed
    pub field: Option<ClientField>,
}

impl ClientFilters {
    /// Filters for invalid clients only.
    pub fn invalid() -> Self {
        Self {
            has_errors: Some(true),
            ..Self::default()
        }
    }

    /// Query-string pairs for the set filters.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if let Some(has_errors) = self.has_errors {
            pairs.push(("has_errors", has_errors.to_string()));
        }
        if let Some(field) = self.field {
            pairs.push(("field", field.wire_name().to_string()));
        }
        pairs
    }
}
