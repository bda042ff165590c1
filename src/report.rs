//! Bulk validation and error reporting.
//!
//! Used when a whole upload is re-checked locally, and to render the
//! server-computed `errors` maps with the same field labels the form uses.

use crate::domain::{validate_record, ClientField, ClientRecord, ValidationResult};
use crate::metrics::Metrics;
use crate::models::{percentage, Stats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Verdict for one row of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct RowReport {
    /// 1-based position in the input
    pub row: usize,

    /// The record as given
    pub record: ClientRecord,

    /// Its verdict
    pub result: ValidationResult,
}

/// Verdicts for a batch of records, with totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,

    /// Number of records failing on each field
    pub errors_by_field: BTreeMap<ClientField, usize>,

    pub rows: Vec<RowReport>,
}

impl BatchReport {
    /// Share of valid records, rounded.
    pub fn valid_percentage(&self) -> u32 {
        percentage(self.valid, self.total)
    }

    /// Share of invalid records, rounded.
    pub fn invalid_percentage(&self) -> u32 {
        percentage(self.invalid, self.total)
    }

    /// Rows with at least one error.
    pub fn invalid_rows(&self) -> impl Iterator<Item = &RowReport> {
        self.rows.iter().filter(|r| !r.result.is_valid())
    }

    /// Totals in the shape `GET /stats` returns.
    pub fn to_stats(&self) -> Stats {
        Stats {
            total: self.total,
            valid: self.valid,
            invalid: self.invalid,
            errors_by_field: self
                .errors_by_field
                .iter()
                .map(|(field, count)| (field.wire_name().to_string(), *count))
                .collect(),
        }
    }
}

/// Validate every record. Rows are independent; one bad row never stops the batch.
pub fn revalidate(records: &[ClientRecord]) -> BatchReport {
    revalidate_with_metrics(records, &Metrics::new())
}

/// [`revalidate`], counting each record in `metrics`.
pub fn revalidate_with_metrics(records: &[ClientRecord], metrics: &Metrics) -> BatchReport {
    let mut report = BatchReport {
        total: records.len(),
        ..BatchReport::default()
    };

    for (idx, record) in records.iter().enumerate() {
        let result = validate_record(record);
        metrics.record_validation(result.is_valid());

        if result.is_valid() {
            report.valid += 1;
        } else {
            report.invalid += 1;
            for field in result.errors().keys() {
                *report.errors_by_field.entry(*field).or_insert(0) += 1;
            }
        }

        report.rows.push(RowReport {
            row: idx + 1,
            record: record.clone(),
            result,
        });
    }

    tracing::debug!(
        total = report.total,
        valid = report.valid,
        invalid = report.invalid,
        "Batch validation completed"
    );
    report
}

/// Render a server `errors` map as `"<Label>: <message>"` lines.
///
/// Known fields (English or wire names) come first in field order with
/// their labels; unknown keys follow, keyed by their raw name.
pub fn describe_errors(errors: &BTreeMap<String, String>) -> Vec<String> {
    let mut known: Vec<(ClientField, &str)> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();

    for (key, message) in errors {
        match ClientField::from_name(key) {
            Some(field) => known.push((field, message.as_str())),
            None => unknown.push(format!("{}: {}", key, message)),
        }
    }

    known.sort_by_key(|(field, _)| *field);
    known
        .into_iter()
        .map(|(field, message)| format!("{}: {}", field.label(), message))
        .chain(unknown)
        .collect()
}
