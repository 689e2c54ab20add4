//! Registrar availability/pricing client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::FixedInterval;

use crate::domain::entities::PriceQuote;
use crate::infrastructure::clients::ClientError;

/// Retries after the first attempt, so three attempts total.
const RETRIES: usize = 2;
/// Pause between attempts.
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Availability and pricing lookup for a single candidate domain.
///
/// Implementations own their retry and rate-limit behavior; an `Err` from
/// [`check`](PricingClient::check) is a terminal outcome for that domain
/// within the current pass.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingClient: Send + Sync {
    /// Checks one domain and classifies it as Standard, Premium, or Taken.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// a response missing required pricing fields.
    async fn check(&self, domain: &str) -> Result<PriceQuote, ClientError>;
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    available: bool,
    #[serde(default)]
    premium: bool,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    premium_price: Option<f64>,
}

/// Registrar-gateway client speaking a JSON check endpoint.
///
/// `GET {base}/check?domain={domain}` returns availability, a premium flag,
/// and the applicable price fields.
pub struct HttpPricingClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPricingClient {
    /// Builds a client with a bounded request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn check_once(&self, domain: &str) -> Result<PriceQuote, ClientError> {
        let url = format!("{}/check", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("domain", domain)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: CheckResponse = response.json().await?;
        quote_from_response(domain, body)
    }
}

fn quote_from_response(domain: &str, body: CheckResponse) -> Result<PriceQuote, ClientError> {
    if !body.available {
        return Ok(PriceQuote::taken());
    }

    if body.premium {
        let price = body.premium_price.or(body.price).ok_or_else(|| {
            ClientError::InvalidResponse(format!("premium domain {domain} without a price"))
        })?;
        return Ok(PriceQuote::premium(price));
    }

    let price = body.price.ok_or_else(|| {
        ClientError::InvalidResponse(format!("available domain {domain} without a price"))
    })?;
    Ok(PriceQuote::standard(price))
}

#[async_trait]
impl PricingClient for HttpPricingClient {
    async fn check(&self, domain: &str) -> Result<PriceQuote, ClientError> {
        let strategy = FixedInterval::new(RETRY_DELAY).take(RETRIES);
        Retry::spawn(strategy, || self.check_once(domain)).await
    }
}
