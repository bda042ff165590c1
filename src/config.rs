//! Configuration management for the Client Data Compiler.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default upload limit: 32 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 32 * 1024 * 1024;

/// Configuration for the Client Data Compiler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote API base URL
    pub api_url: String,

    /// Base URL exported files are served from
    pub files_url: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Largest spreadsheet accepted for upload, in bytes (default: 32 MB)
    pub max_upload_bytes: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CLIENT_API_URL`: Base URL for the API (default: `http://localhost:8080/api`)
    /// - `CLIENT_FILES_URL`: Base URL for exported files (default: `http://localhost:8080/files`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `MAX_UPLOAD_BYTES`: Upload size limit (default: 33554432)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let api_url = Self::parse_env_url("CLIENT_API_URL", &defaults.api_url)?;
        let files_url = Self::parse_env_url("CLIENT_FILES_URL", &defaults.files_url)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let max_upload_bytes = Self::parse_env_u64("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;

        if max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_UPLOAD_BYTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            api_url,
            files_url,
            request_timeout,
            max_upload_bytes,
            log_level,
        })
    }

    /// Read an http(s) URL from the environment, falling back to `default`.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = env::var(var_name).unwrap_or_else(|_| default.to_string());
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(url)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: "http://localhost:8080/api".to_string(),
            files_url: "http://localhost:8080/files".to_string(),
            request_timeout: 30,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_level: "error".to_string(),
        }
    }
}
