//! Handler for the filtered export endpoint.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::export::{ExportFormat, ExportParams};
use crate::application::services::{render_csv, render_json};
use crate::error::AppError;
use crate::state::AppState;

/// Exports the currently filtered/sorted records as a file download.
///
/// # Endpoint
///
/// `GET /api/domains/export`
///
/// # Query Parameters
///
/// All listing parameters plus `format` (`csv` or `json`, default `csv`).
/// The export contains exactly the records the listing endpoint would
/// return for the same parameters, in the same order.
///
/// CSV output has one fixed header row and renders null fields as empty
/// strings; JSON output is a pretty-printed array with nulls preserved.
///
/// # Errors
///
/// Returns 500 with a structured `{error, message, details}` body on
/// store-level failure.
pub async fn export_handler(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, AppError> {
    let records = state
        .query_service
        .list(&params.query.to_filter(), &params.query.to_sort())
        .await?;

    let format = params.format();
    let body = match format {
        ExportFormat::Csv => render_csv(&records)?,
        ExportFormat::Json => render_json(&records)?,
    };

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ),
    ];

    Ok((headers, body).into_response())
}
