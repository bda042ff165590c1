//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters and duration tracking for HTTP requests and for local
//! record validation.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the API client and bulk validation.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of clients received from the API
    clients_fetched_total: Arc<AtomicU64>,

    /// Number of records validated locally
    records_validated_total: Arc<AtomicU64>,

    /// Number of locally validated records that failed
    records_invalid_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            clients_fetched_total: Arc::new(AtomicU64::new(0)),
            records_validated_total: Arc::new(AtomicU64::new(0)),
            records_invalid_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record clients received from the API.
    pub fn record_clients_fetched(&self, count: usize) {
        self.clients_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record one local validation and whether it passed.
    pub fn record_validation(&self, valid: bool) {
        self.records_validated_total.fetch_add(1, Ordering::Relaxed);
        if !valid {
            self.records_invalid_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total clients fetched.
    pub fn clients_fetched_total(&self) -> u64 {
        self.clients_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total records validated.
    pub fn records_validated_total(&self) -> u64 {
        self.records_validated_total.load(Ordering::Relaxed)
    }

    /// Get total records that failed validation.
    pub fn records_invalid_total(&self) -> u64 {
        self.records_invalid_total.load(Ordering::Relaxed)
    }

    /// Fraction of validated records that failed (0.0 when none validated).
    pub fn invalid_ratio(&self) -> f64 {
        let total = self.records_validated_total();
        if total == 0 {
            0.0
        } else {
            self.records_invalid_total() as f64 / total as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.http_requests_total.store(0, Ordering::Relaxed);
        self.http_errors_total.store(0, Ordering::Relaxed);
        self.http_duration_total_ms.store(0, Ordering::Relaxed);
        self.clients_fetched_total.store(0, Ordering::Relaxed);
        self.records_validated_total.store(0, Ordering::Relaxed);
        self.records_invalid_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            clients_fetched_total: self.clients_fetched_total(),
            records_validated_total: self.records_validated_total(),
            records_invalid_total: self.records_invalid_total(),
            invalid_ratio: self.invalid_ratio(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub clients_fetched_total: u64,
    pub records_validated_total: u64,
    pub records_invalid_total: u64,
    pub invalid_ratio: f64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}
