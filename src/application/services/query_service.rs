//! Read-side service: filtered listing, aggregate stats, and export.

use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{DomainRecord, PriceType};
use crate::domain::repositories::{DomainFilter, DomainRecordRepository, DomainStats, SortSpec};
use crate::error::AppError;

/// CSV header row. Written unconditionally, so an empty result set still
/// exports a valid file; field order must match [`ExportRow`].
const CSV_HEADER: [&str; 8] = [
    "domain",
    "memorability",
    "pronunciation",
    "visual_appeal",
    "brandability",
    "average_score",
    "price",
    "price_type",
];

/// One exported record, in [`CSV_HEADER`] field order.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    domain: &'a str,
    memorability: Option<f64>,
    pronunciation: Option<f64>,
    visual_appeal: Option<f64>,
    brandability: Option<f64>,
    average_score: Option<f64>,
    price: Option<f64>,
    price_type: Option<PriceType>,
}

impl<'a> From<&'a DomainRecord> for ExportRow<'a> {
    fn from(record: &'a DomainRecord) -> Self {
        Self {
            domain: &record.domain,
            memorability: record.memorability,
            pronunciation: record.pronunciation,
            visual_appeal: record.visual_appeal,
            brandability: record.brandability,
            average_score: record.average_score,
            price: record.price,
            price_type: record.price_type,
        }
    }
}

/// Service for querying and exporting domain records.
///
/// Pure read side: translates structured filter/sort values into store
/// queries and renders export payloads. Safe to call from any number of
/// concurrent requests.
pub struct DomainQueryService<R: DomainRecordRepository> {
    repository: Arc<R>,
}

impl<R: DomainRecordRepository> DomainQueryService<R> {
    /// Creates a new query service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves records matching the filter, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(
        &self,
        filter: &DomainFilter,
        sort: &SortSpec,
    ) -> Result<Vec<DomainRecord>, AppError> {
        self.repository.list(filter, sort).await
    }

    /// Aggregate statistics over the whole store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self) -> Result<DomainStats, AppError> {
        self.repository.stats().await
    }
}

/// Renders records as CSV: one header row, nulls as empty strings.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if serialization fails.
pub fn render_csv(records: &[DomainRecord]) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::internal("CSV export failed", json!({ "error": e.to_string() })))?;

    for record in records {
        writer
            .serialize(ExportRow::from(record))
            .map_err(|e| AppError::internal("CSV export failed", json!({ "error": e.to_string() })))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal("CSV export failed", json!({ "error": e.to_string() })))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::internal("CSV export failed", json!({ "error": e.to_string() })))
}

/// Renders records as a pretty-printed JSON array, nulls preserved.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if serialization fails.
pub fn render_json(records: &[DomainRecord]) -> Result<String, AppError> {
    let rows: Vec<ExportRow<'_>> = records.iter().map(ExportRow::from).collect();
    serde_json::to_string_pretty(&rows)
        .map_err(|e| AppError::internal("JSON export failed", json!({ "error": e.to_string() })))
}
