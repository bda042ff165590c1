//! Aggregate counts over the loaded clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rounded integer percentage of `value` over `total`; 0 when `total` is 0.
pub fn percentage(value: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round() as u32
}

/// Totals returned by `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Stats {
    /// Number of clients loaded
    pub total: usize,

    /// Clients with no errors
    pub valid: usize,

    /// Clients with at least one error
    pub invalid: usize,

    /// Failing-client count per wire field name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors_by_field: BTreeMap<String, usize>,
}

impl Stats {
    /// Whether any clients are loaded.
    pub fn has_data(&self) -> bool {
        self.total > 0
    }

    /// Share of valid clients, rounded.
    pub fn valid_percentage(&self) -> u32 {
        percentage(self.valid, self.total)
    }

    /// Share of invalid clients, rounded.
    pub fn invalid_percentage(&self) -> u32 {
        percentage(self.invalid, self.total)
    }

    /// Share of the invalid clients that failed on `field`.
    pub fn field_error_percentage(&self, field: &str) -> u32 {
        let count = self.errors_by_field.get(field).copied().unwrap_or(0);
        percentage(count, self.invalid)
    }
}
