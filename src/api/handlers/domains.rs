//! Handler for the domain listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::domain_list::{DomainItem, DomainQueryParams};
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves candidate domains matching the requested filters.
///
/// # Endpoint
///
/// `GET /api/domains`
///
/// # Query Parameters
///
/// - `search` (optional): case-insensitive substring match on the domain
/// - `tld` (optional): exact match on the suffix after the last dot
/// - `min_score` (optional): minimum average score; unscored records are
///   excluded when > 0
/// - `price_type` (optional): exact price classification match
/// - `max_price` (optional): maximum price; 0 means no limit
/// - `priced_only` (optional): `true`/`1` to require a pricing result
/// - `sort_by` (optional): column name (default: `average_score`)
/// - `sort_dir` (optional): `asc` or `desc` (default: `desc`)
///
/// Malformed parameter values are coerced to their defaults, never rejected.
/// Records without a value in the sort column always come last, in both
/// directions.
///
/// # Errors
///
/// Returns 500 with a structured `{error, message, details}` body on
/// store-level failure.
pub async fn domain_list_handler(
    State(state): State<AppState>,
    Query(params): Query<DomainQueryParams>,
) -> Result<Json<Vec<DomainItem>>, AppError> {
    let records = state
        .query_service
        .list(&params.to_filter(), &params.to_sort())
        .await?;

    Ok(Json(records.into_iter().map(DomainItem::from).collect()))
}
