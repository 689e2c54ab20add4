//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. Malformed numeric values fall
//! back to defaults rather than aborting.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://data/domains.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PRICING_BASE_URL` - Registrar gateway base URL
//! - `PRICING_CONCURRENCY` - Max in-flight pricing calls (default: 10)
//! - `OPENAI_API_KEY` - Scoring API key (required by the scoring pass only)
//! - `OPENAI_BASE_URL` - Scoring API base URL (default: `https://api.openai.com/v1`)
//! - `OPENAI_MODEL` - Scoring model name (default: `gpt-4o-mini`)
//! - `SCORING_BATCH_SIZE` - Domains per scoring request (default: 10)
//! - `HTTP_TIMEOUT_SECONDS` - Outbound request timeout (default: 15)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    /// Base URL of the registrar availability/pricing gateway.
    pub pricing_base_url: String,
    /// Maximum number of concurrent pricing calls per pass.
    pub pricing_concurrency: usize,

    /// Scoring API key. Optional at load time; the scoring pass fails
    /// without it, the server and the other passes do not need it.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Domains per scoring API request.
    pub scoring_batch_size: usize,

    /// Outbound HTTP timeout in seconds for both client adapters.
    pub http_timeout_seconds: u64,

    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/domains.db".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let pricing_base_url = env::var("PRICING_BASE_URL")
            .unwrap_or_else(|_| "https://registrar-gateway.local".to_string());

        let pricing_concurrency = env::var("PRICING_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty());

        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let scoring_batch_size = env::var("SCORING_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            pricing_base_url,
            pricing_concurrency,
            openai_api_key,
            openai_base_url,
            openai_model,
            scoring_batch_size,
            http_timeout_seconds,
            db_max_connections,
        })
    }

    /// The scoring API key, or an error for commands that need it.
    pub fn require_openai_key(&self) -> Result<&str> {
        self.openai_api_key
            .as_deref()
            .context("OPENAI_API_KEY must be set to run the scoring pass")
    }
}
