//! Upload, export and stored-file models.

use super::client::Client;
use super::stats::percentage;
use serde::{Deserialize, Serialize};

/// Result of `POST /upload/`: counts plus a preview of parsed rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct UploadSummary {
    /// Name of the uploaded file
    pub filename: String,

    /// Rows read from the spreadsheet
    pub total_clients: usize,

    /// Rows that passed validation
    pub valid_clients: usize,

    /// Rows with at least one error
    pub invalid_clients: usize,

    /// First rows, already validated server-side
    pub preview: Vec<Client>,
}

impl UploadSummary {
    /// Share of valid rows, rounded.
    pub fn valid_percentage(&self) -> u32 {
        percentage(self.valid_clients, self.total_clients)
    }

    /// Share of invalid rows, rounded.
    pub fn invalid_percentage(&self) -> u32 {
        percentage(self.invalid_clients, self.total_clients)
    }

    /// Up to `n` preview rows and the number of rows not shown.
    pub fn preview_head(&self, n: usize) -> (&[Client], usize) {
        let shown = &self.preview[..self.preview.len().min(n)];
        (shown, self.total_clients.saturating_sub(shown.len()))
    }
}

/// Result of `GET /export`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ExportResult {
    /// Server-side path, e.g. `uploads/clientes_2026.xlsx`
    pub file_path: String,

    /// Public URL when the server provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// An uploaded spreadsheet known to the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct UploadedFile {
    /// File name
    pub filename: String,

    /// Size in bytes
    pub size: u64,

    /// Upload time (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<String>,
}

/// Verdict returned by `POST /validate/single`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RemoteVerdict {
    /// Whether every field passed
    pub is_valid: bool,

    /// Error messages keyed by wire field name
    pub errors: std::collections::BTreeMap<String, String>,
}
