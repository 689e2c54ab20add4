//! # Domain Scout
//!
//! Short domain name discovery built with Axum and SQLite.
//!
//! Generates candidate 1-3 symbol domain names, checks registrar
//! availability and pricing, scores candidates on branding criteria via an
//! AI API, and serves the results through a filterable/sortable JSON API
//! with CSV/JSON export.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Generation algorithms, entities, and repository traits
//! - **Application Layer** ([`application`]) - Seeding, enrichment, and query services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and HTTP client adapters
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://data/domains.db
//! export DATABASE_URL="sqlite://data/domains.db"
//!
//! # Seed candidates and run the enrichment pipeline
//! cargo run --bin pipeline -- generate
//! cargo run --bin pipeline -- run --limit 500
//!
//! # Start the query API
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        DomainQueryService, EnrichmentService, GenerationService,
    };
    pub use crate::domain::entities::{DomainRecord, PriceQuote, PriceType, ScoreSet};
    pub use crate::domain::generator::Category;
    pub use crate::domain::repositories::{DomainFilter, SortDir, SortKey, SortSpec};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
