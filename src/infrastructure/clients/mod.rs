//! Outbound client adapters for external collaborators.
//!
//! Each module pairs a trait with its reqwest-based implementation.
//! Retry policy and timeouts belong here, not in the core: callers treat
//! any surviving `Err` as a terminal per-domain outcome and move on.

pub mod pricing;
pub mod scoring;

pub use pricing::{HttpPricingClient, PricingClient};
pub use scoring::{OpenAiScoringClient, ScoringClient};

#[cfg(test)]
pub use pricing::MockPricingClient;
#[cfg(test)]
pub use scoring::MockScoringClient;

use thiserror::Error;

/// Failure modes shared by the outbound clients.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
