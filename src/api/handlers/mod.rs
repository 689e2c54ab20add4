//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod domains;
pub mod export;
pub mod health;
pub mod stats;

pub use domains::domain_list_handler;
pub use export::export_handler;
pub use health::health_handler;
pub use stats::stats_handler;
