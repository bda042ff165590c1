//! Error types for the Client Data Compiler.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures are not errors in this sense; they live in
//! [`crate::domain::ValidationError`] and are returned as ordinary values.

use thiserror::Error;

/// Errors that can occur when talking to the remote client API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// 400 Bad Request
    #[error("Petición incorrecta: {0}")]
    BadRequest(String),

    /// 404 Not Found
    #[error("Recurso no encontrado: {0}")]
    NotFound(String),

    /// 500 Internal Server Error
    #[error("Error interno del servidor: {0}")]
    ServerError(String),

    /// Any other non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// The API answered with `success: false`
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Request refused locally before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Problems with a spreadsheet selected for upload.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Neither the MIME type nor the extension identifies an Excel workbook
    #[error("Solo se permiten archivos Excel (.xlsx)")]
    InvalidFileType,

    /// File exceeds the configured size limit
    #[error("El archivo es demasiado grande. Máximo {max}")]
    FileTooLarge { max: String },
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
