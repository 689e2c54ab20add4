//! Service implementations for the application layer.
//!
//! - [`GenerationService`] - candidate generation and store seeding
//! - [`EnrichmentService`] - pricing and scoring passes
//! - [`DomainQueryService`] - filtered listing, stats, export rendering

pub mod enrichment_service;
pub mod generation_service;
pub mod query_service;

pub use enrichment_service::{EnrichmentService, PassSummary};
pub use generation_service::{GenerationService, SeedSummary};
pub use query_service::{DomainQueryService, render_csv, render_json};
