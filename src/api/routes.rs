//! API route configuration.

use crate::api::handlers::{domain_list_handler, export_handler, stats_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET /domains`        - Filtered/sorted domain listing
/// - `GET /domains/export` - Same records as a CSV or JSON download
/// - `GET /stats`          - Aggregate statistics
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(domain_list_handler))
        .route("/domains/export", get(export_handler))
        .route("/stats", get(stats_handler))
}
