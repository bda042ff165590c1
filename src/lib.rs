//! Client Data Compiler - validation and API glue for spreadsheets of customer records.
//!
//! Customer records (clave, nombre, correo, telefono) are uploaded as Excel
//! files to a remote API that parses and stores them. This library holds the
//! ruleset those records are judged by, so form entry, upload previews and
//! bulk re-validation agree with each other and with the server.
//!
//! # Architecture
//!
//! - **domain**: Allow-lists, field validators, record verdicts and formatters (pure)
//! - **models**: Payloads returned by the remote API
//! - **client**: Blocking HTTP client for the API and its async wrapper
//! - **report**: Bulk validation and labelled error rendering
//! - **upload**: Local checks on files before upload
//! - **config**: Configuration from environment variables
//! - **error**: Error types for API, configuration and upload failures
//! - **metrics**: Request and validation counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod upload;

pub use client::{ApiClient, AsyncApiClient, AsyncApiClientImpl};
pub use config::Config;
pub use domain::{
    format_email, format_key, format_name, format_phone, validate_email, validate_key,
    validate_name, validate_phone, validate_record, ClientField, ClientRecord, ValidatedClient,
    ValidationError, ValidationResult,
};
pub use error::{ApiError, ConfigError, UploadError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Client, ClientFilters, ExportResult, Stats, UploadSummary};
pub use report::{describe_errors, revalidate, BatchReport};
