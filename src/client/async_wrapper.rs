//! Async wrapper around the synchronous ApiClient.
//!
//! This module provides an async interface to the synchronous ApiClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::ApiClient;
use crate::domain::ClientRecord;
use crate::error::{ApiError, ApiResult};
use crate::models::*;
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for client-records API operations.
#[async_trait]
pub trait AsyncApiClient: Send + Sync {
    async fn get_clients(&self, filters: ClientFilters) -> ApiResult<Vec<Client>>;
    async fn get_client(&self, id: &str) -> ApiResult<Client>;
    async fn update_client(&self, id: &str, record: &ClientRecord) -> ApiResult<Client>;
    async fn delete_client(&self, id: &str) -> ApiResult<Option<String>>;
    async fn search_clients(&self, term: &str) -> ApiResult<Vec<Client>>;
    async fn clear_all_clients(&self) -> ApiResult<Option<String>>;

    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadSummary>;
    async fn download_template(&self) -> ApiResult<Vec<u8>>;
    async fn get_uploaded_files(&self) -> ApiResult<Vec<UploadedFile>>;

    async fn validate_all(&self) -> ApiResult<Vec<Client>>;
    async fn validate_single(&self, record: &ClientRecord) -> ApiResult<RemoteVerdict>;

    async fn get_stats(&self) -> ApiResult<Stats>;
    async fn export_to_excel(&self, filename: &str) -> ApiResult<ExportResult>;

    /// Public URL of an exported file; no I/O.
    fn file_url(&self, file_path: &str) -> String;
}

/// Async wrapper around synchronous ApiClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncApiClientImpl {
    client: Arc<ApiClient>,
}

impl AsyncApiClientImpl {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped blocking client.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }

    async fn run<T, F>(&self, op: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ApiClient) -> ApiResult<T> + Send + 'static,
    {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || op(&*client))
            .await
            .map_err(|e| ApiError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl AsyncApiClient for AsyncApiClientImpl {
    async fn get_clients(&self, filters: ClientFilters) -> ApiResult<Vec<Client>> {
        self.run(move |c| c.get_clients(&filters)).await
    }

    async fn get_client(&self, id: &str) -> ApiResult<Client> {
        let id = id.to_string();
        self.run(move |c| c.get_client(&id)).await
    }

    async fn update_client(&self, id: &str, record: &ClientRecord) -> ApiResult<Client> {
        let id = id.to_string();
        let record = record.clone();
        self.run(move |c| c.update_client(&id, &record)).await
    }

    async fn delete_client(&self, id: &str) -> ApiResult<Option<String>> {
        let id = id.to_string();
        self.run(move |c| c.delete_client(&id)).await
    }

    async fn search_clients(&self, term: &str) -> ApiResult<Vec<Client>> {
        let term = term.to_string();
        self.run(move |c| c.search_clients(&term)).await
    }

    async fn clear_all_clients(&self) -> ApiResult<Option<String>> {
        self.run(|c| c.clear_all_clients()).await
    }

    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadSummary> {
        let filename = filename.to_string();
        self.run(move |c| c.upload_file(&filename, &bytes)).await
    }

    async fn download_template(&self) -> ApiResult<Vec<u8>> {
        self.run(|c| c.download_template()).await
    }

    async fn get_uploaded_files(&self) -> ApiResult<Vec<UploadedFile>> {
        self.run(|c| c.get_uploaded_files()).await
    }

    async fn validate_all(&self) -> ApiResult<Vec<Client>> {
        self.run(|c| c.validate_all()).await
    }

    async fn validate_single(&self, record: &ClientRecord) -> ApiResult<RemoteVerdict> {
        let record = record.clone();
        self.run(move |c| c.validate_single(&record)).await
    }

    async fn get_stats(&self) -> ApiResult<Stats> {
        self.run(|c| c.get_stats()).await
    }

    async fn export_to_excel(&self, filename: &str) -> ApiResult<ExportResult> {
        let filename = filename.to_string();
        self.run(move |c| c.export_to_excel(&filename)).await
    }

    fn file_url(&self, file_path: &str) -> String {
        self.client.file_url(file_path)
    }
}
