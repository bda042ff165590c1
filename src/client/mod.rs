//! HTTP client for the remote client-records API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The API parses spreadsheets, stores clients and
//! generates exports; this client handles error mapping, the response envelope, and
//! refusing to send records or files that fail the local checks.

mod async_wrapper;
mod multipart;
pub use async_wrapper::{AsyncApiClient, AsyncApiClientImpl};

use crate::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
use crate::domain::{validate_record, ClientRecord};
use crate::error::{ApiError, ApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{
    ApiResponse, Client, ClientFilters, ExportResult, RemoteVerdict, Stats, UploadSummary,
    UploadedFile,
};
use crate::upload::{check_file, mime_for};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// `data` payload carrying a list of clients.
#[derive(Debug, Deserialize)]
struct ClientsData {
    #[serde(default)]
    clients: Vec<Client>,
}

/// `data` payload carrying one client.
#[derive(Debug, Deserialize)]
struct ClientData {
    client: Client,
}

/// `data` payload of `GET /stats`.
#[derive(Debug, Deserialize)]
struct StatsData {
    stats: Stats,
}

/// `data` payload of `GET /upload/files`.
#[derive(Debug, Deserialize)]
struct FilesData {
    #[serde(default)]
    files: Vec<UploadedFile>,
}

/// Error body the API sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

const CONNECTION_FAILED: &str =
    "No se pudo conectar con el servidor. Verifica que el backend esté ejecutándose.";

/// HTTP client for the client-records API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL for the API
    base_url: String,

    /// Base URL exported files are served from
    files_url: String,

    /// Largest spreadsheet accepted for upload
    max_upload_bytes: u64,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ApiClient {
    /// Create a new ApiClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_url.clone(),
            files_url: config.files_url.clone(),
            max_upload_bytes: config.max_upload_bytes,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create an ApiClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            files_url: format!("{}/files", base_url.trim_end_matches('/')),
            base_url,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Finish timing a request and map its error.
    fn finish(
        &self,
        method: &str,
        url: &str,
        timer: HttpTimer,
        result: Result<ureq::Response, ureq::Error>,
    ) -> ApiResult<ureq::Response> {
        match result {
            Ok(response) => {
                timer.complete();
                tracing::debug!("{} {} - {}", method, url, response.status());
                Ok(response)
            }
            Err(e) => {
                timer.complete_with_error();
                let err = self.map_error(e);
                tracing::error!("{} {} - Error: {}", method, url, err);
                Err(err)
            }
        }
    }

    /// Execute a GET request with optional query pairs.
    fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let mut request = self.agent.get(&url);
        for (key, value) in query {
            request = request.query(key, value);
        }
        let result = request.call();
        self.finish("GET", &url, timer, result)
    }

    /// Execute a request carrying a JSON body.
    fn send_json(
        &self,
        method: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("{} {}", method, url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .request(method, &url)
            .set("Content-Type", "application/json")
            .send_json(body);
        self.finish(method, &url, timer, result)
    }

    /// Execute a DELETE request.
    fn delete(&self, path: &str) -> ApiResult<ureq::Response> {
        let url = self.build_url(path);
        tracing::debug!("DELETE {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self.agent.delete(&url).call();
        self.finish("DELETE", &url, timer, result)
    }

    /// Map a ureq error to an ApiError.
    fn map_error(&self, error: ureq::Error) -> ApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .ok()
                    .and_then(|b| b.message)
                    .unwrap_or_else(|| {
                        if body.trim().is_empty() {
                            format!("Error {}", code)
                        } else {
                            body
                        }
                    });

                match code {
                    400 => ApiError::BadRequest(message),
                    404 => ApiError::NotFound(message),
                    500 => ApiError::ServerError(message),
                    _ => ApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                    ApiError::HttpError(CONNECTION_FAILED.to_string())
                }
                ureq::ErrorKind::Io => ApiError::Timeout,
                _ => ApiError::HttpError(transport.to_string()),
            },
        }
    }

    /// Read a response body as an envelope and unwrap its `data`.
    fn read_data<T: DeserializeOwned>(response: ureq::Response) -> ApiResult<T> {
        let body = response
            .into_string()
            .map_err(|e| ApiError::HttpError(e.to_string()))?;
        let envelope: ApiResponse<T> = serde_json::from_str(&body)?;
        envelope.into_result()
    }

    /// Read an envelope with no payload, returning its message.
    fn read_message(response: ureq::Response) -> ApiResult<Option<String>> {
        let body = response
            .into_string()
            .map_err(|e| ApiError::HttpError(e.to_string()))?;
        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(&body)?;
        envelope.into_message()
    }

    fn record_clients(&self, clients: &[Client]) {
        self.metrics.record_clients_fetched(clients.len());
    }

    // ========================= Client Operations =========================

    /// List stored clients, optionally filtered.
    pub fn get_clients(&self, filters: &ClientFilters) -> ApiResult<Vec<Client>> {
        let response = self.get("/clients", &filters.to_query_pairs())?;
        let data: ClientsData = Self::read_data(response)?;
        self.record_clients(&data.clients);
        Ok(data.clients)
    }

    /// Get a single client by id.
    pub fn get_client(&self, id: &str) -> ApiResult<Client> {
        let response = self.get(&format!("/clients/{}", urlencoding::encode(id)), &[])?;
        let data: ClientData = Self::read_data(response)?;
        self.metrics.record_clients_fetched(1);
        Ok(data.client)
    }

    /// Update a client.
    ///
    /// The record is validated locally first and normalised before sending;
    /// an invalid record is refused with [`ApiError::InvalidRequest`] and
    /// never reaches the server.
    pub fn update_client(&self, id: &str, record: &ClientRecord) -> ApiResult<Client> {
        let verdict = validate_record(record);
        self.metrics.record_validation(verdict.is_valid());
        if !verdict.is_valid() {
            tracing::warn!(
                "Refusing to update client {}: {} invalid field(s)",
                id,
                verdict.error_count()
            );
            return Err(ApiError::InvalidRequest(
                verdict.labeled_messages().join("; "),
            ));
        }

        let body = serde_json::to_value(record.normalized())?;
        let path = format!("/clients/{}", urlencoding::encode(id));
        let response = self.send_json("PUT", &path, &body)?;
        let data: ClientData = Self::read_data(response)?;
        Ok(data.client)
    }

    /// Delete a client.
    pub fn delete_client(&self, id: &str) -> ApiResult<Option<String>> {
        let response = self.delete(&format!("/clients/{}", urlencoding::encode(id)))?;
        Self::read_message(response)
    }

    /// Full-text search over stored clients.
    pub fn search_clients(&self, term: &str) -> ApiResult<Vec<Client>> {
        let path = format!("/clients/search?q={}", urlencoding::encode(term));
        let response = self.get(&path, &[])?;
        let data: ClientsData = Self::read_data(response)?;
        self.record_clients(&data.clients);
        Ok(data.clients)
    }

    /// Remove every stored client.
    pub fn clear_all_clients(&self) -> ApiResult<Option<String>> {
        let response = self.delete("/clients")?;
        Self::read_message(response)
    }

    // ========================= Upload Operations =========================

    /// Upload a spreadsheet for server-side parsing and validation.
    ///
    /// The file name and size are checked locally first; every failed check
    /// is reported in one [`ApiError::InvalidRequest`].
    pub fn upload_file(&self, filename: &str, bytes: &[u8]) -> ApiResult<UploadSummary> {
        let problems = check_file(
            filename,
            mime_for(filename),
            bytes.len() as u64,
            self.max_upload_bytes,
        );
        if !problems.is_empty() {
            let messages: Vec<String> = problems.iter().map(|e| e.to_string()).collect();
            return Err(ApiError::InvalidRequest(messages.join("; ")));
        }

        let form = multipart::Form::single_file("file", filename, bytes);
        let url = self.build_url("/upload/");
        tracing::debug!("POST {} ({} bytes)", url, bytes.len());

        let timer = HttpTimer::new(self.metrics.clone());
        let result = self
            .agent
            .post(&url)
            .set("Content-Type", &form.content_type())
            .send_bytes(&form.body());
        let response = self.finish("POST", &url, timer, result)?;

        let summary: UploadSummary = Self::read_data(response)?;
        tracing::info!(
            "Uploaded {}: {} clients, {} valid, {} invalid",
            summary.filename,
            summary.total_clients,
            summary.valid_clients,
            summary.invalid_clients
        );
        Ok(summary)
    }

    /// Download the empty upload template as raw bytes.
    pub fn download_template(&self) -> ApiResult<Vec<u8>> {
        let response = self.get("/upload/template", &[])?;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| ApiError::HttpError(e.to_string()))?;
        Ok(bytes)
    }

    /// List previously uploaded spreadsheets.
    pub fn get_uploaded_files(&self) -> ApiResult<Vec<UploadedFile>> {
        let response = self.get("/upload/files", &[])?;
        let data: FilesData = Self::read_data(response)?;
        Ok(data.files)
    }

    // ========================= Validation Operations =========================

    /// Re-run server-side validation on every stored client.
    pub fn validate_all(&self) -> ApiResult<Vec<Client>> {
        let response = self.get("/validate/", &[])?;
        let data: ClientsData = Self::read_data(response)?;
        self.record_clients(&data.clients);
        Ok(data.clients)
    }

    /// Ask the server for its verdict on one record.
    pub fn validate_single(&self, record: &ClientRecord) -> ApiResult<RemoteVerdict> {
        let body = serde_json::to_value(record)?;
        let response = self.send_json("POST", "/validate/single", &body)?;
        let verdict: RemoteVerdict = Self::read_data(response)?;

        let local = validate_record(record);
        if local.is_valid() != verdict.is_valid {
            tracing::warn!(
                "Server verdict ({}) differs from local verdict ({}) for clave {:?}",
                verdict.is_valid,
                local.is_valid(),
                record.key
            );
        }
        Ok(verdict)
    }

    // ========================= Stats & Export =========================

    /// Aggregate counts over stored clients.
    pub fn get_stats(&self) -> ApiResult<Stats> {
        let response = self.get("/stats", &[])?;
        let data: StatsData = Self::read_data(response)?;
        Ok(data.stats)
    }

    /// Generate an Excel export; an empty `filename` lets the server choose.
    pub fn export_to_excel(&self, filename: &str) -> ApiResult<ExportResult> {
        let path = format!("/export?filename={}", urlencoding::encode(filename));
        let response = self.get(&path, &[])?;
        Self::read_data(response)
    }

    /// Public URL of an exported file.
    pub fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/{}",
            self.files_url.trim_end_matches('/'),
            file_path.replacen("uploads/", "", 1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = ApiClient::with_base_url("https://api.example.com".to_string());

        assert_eq!(
            client.build_url("/clients"),
            "https://api.example.com/clients"
        );
        assert_eq!(
            client.build_url("clients"),
            "https://api.example.com/clients"
        );

        let client_with_slash = ApiClient::with_base_url("https://api.example.com/".to_string());
        assert_eq!(
            client_with_slash.build_url("/upload/"),
            "https://api.example.com/upload/"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_url: "https://clientes.example.mx/api".to_string(),
            files_url: "https://clientes.example.mx/files".to_string(),
            request_timeout: 5,
            max_upload_bytes: 1024,
            log_level: "error".to_string(),
        };

        let client = ApiClient::new(&config);
        assert_eq!(client.base_url, "https://clientes.example.mx/api");
        assert_eq!(client.max_upload_bytes, 1024);
    }

    #[test]
    fn test_file_url_strips_uploads_prefix() {
        let config = Config::default();
        let client = ApiClient::new(&config);
        assert_eq!(
            client.file_url("uploads/clientes_2026.xlsx"),
            "http://localhost:8080/files/clientes_2026.xlsx"
        );
        assert_eq!(
            client.file_url("exports/a.xlsx"),
            "http://localhost:8080/files/exports/a.xlsx"
        );
    }

    #[test]
    fn test_update_refuses_invalid_record() {
        // Unroutable base URL: the request must never be attempted
        let client = ApiClient::with_base_url("http://127.0.0.1:9".to_string());
        let record = ClientRecord::new("abc", "Ana", "ana@gmail.com", "9611234567");

        match client.update_client("1", &record) {
            Err(ApiError::InvalidRequest(msg)) => {
                assert_eq!(msg, "Clave: La clave debe ser un número válido")
            }
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        }
        assert_eq!(client.metrics().http_requests_total(), 0);
        assert_eq!(client.metrics().records_invalid_total(), 1);
    }

    #[test]
    fn test_upload_refuses_non_excel_file() {
        let client = ApiClient::with_base_url("http://127.0.0.1:9".to_string());
        match client.upload_file("clientes.csv", b"a,b,c") {
            Err(ApiError::InvalidRequest(msg)) => {
                assert_eq!(msg, "Solo se permiten archivos Excel (.xlsx)")
            }
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        }
        assert_eq!(client.metrics().http_requests_total(), 0);
    }
}
