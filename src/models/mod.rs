//! Data models for the remote client API.
//!
//! This module contains the payloads the API sends back: stored clients with
//! their server-side verdicts, upload and export results, statistics, and the
//! response envelope they all arrive in.

pub mod client;
pub mod response;
pub mod stats;
pub mod upload;

pub use client::{format_date, Client, ClientFilters};
pub use response::ApiResponse;
pub use stats::{percentage, Stats};
pub use upload::{ExportResult, RemoteVerdict, UploadSummary, UploadedFile};
