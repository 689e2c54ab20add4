//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Query
//! parameters arrive as raw strings and are coerced, never rejected:
//! a malformed value degrades to its default so the dashboard stays usable.

pub mod domain_list;
pub mod export;
pub mod health;
pub mod stats;
