//! Handler for the aggregate statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves aggregate statistics over the whole record store.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total": 48324,
///   "averages": { "avg_average_score": 6.2, "avg_memorability": 6.8, ... },
///   "tlds": [{ "tld": "io", "count": 1726 }, ...],
///   "price_stats": [{ "price_type": "Standard", "count": 412, "avg_price": 24.9 }, ...],
///   "errors": 17
/// }
/// ```
///
/// `price_stats` covers priced records excluding failed lookups; those are
/// reported in `errors`.
///
/// # Errors
///
/// Returns 500 with a structured `{error, message, details}` body on
/// store-level failure.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.query_service.stats().await?;
    Ok(Json(StatsResponse::from(stats)))
}
