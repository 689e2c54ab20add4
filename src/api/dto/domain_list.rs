//! DTOs for the domain listing endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DomainRecord, PriceType};
use crate::domain::repositories::{DomainFilter, SortDir, SortKey, SortSpec};

/// Raw query parameters for `GET /api/domains`.
///
/// Every field is an optional string: values that fail to parse are coerced
/// to the filter's default instead of producing a 400, so a dashboard with a
/// half-typed filter box still gets a response.
#[derive(Debug, Default, Deserialize)]
pub struct DomainQueryParams {
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub search: Option<String>,
    pub tld: Option<String>,
    pub min_score: Option<String>,
    pub price_type: Option<String>,
    pub max_price: Option<String>,
    pub priced_only: Option<String>,
}

impl DomainQueryParams {
    /// Coerces the raw parameters into a structured filter.
    ///
    /// Empty strings count as absent; non-numeric thresholds become 0
    /// (the "no limit" sentinel); an unknown `price_type` becomes no
    /// price-type filter at all.
    pub fn to_filter(&self) -> DomainFilter {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let parse_f64 = |v: &Option<String>| {
            v.as_deref()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|n| n.is_finite() && *n >= 0.0)
                .unwrap_or(0.0)
        };

        let priced_only = matches!(
            self.priced_only.as_deref().map(str::trim),
            Some("true") | Some("1")
        );

        let price_type = self
            .price_type
            .as_deref()
            .and_then(|s| s.trim().parse::<PriceType>().ok());

        DomainFilter::default()
            .with_search(non_empty(&self.search))
            .with_tld(non_empty(&self.tld))
            .with_min_score(parse_f64(&self.min_score))
            .with_price(priced_only, price_type, parse_f64(&self.max_price))
    }

    /// Coerces the raw sort parameters, falling back to the default order
    /// (average score, descending) for unknown values.
    pub fn to_sort(&self) -> SortSpec {
        let key = self
            .sort_by
            .as_deref()
            .map(SortKey::parse_or_default)
            .unwrap_or_default();

        let dir = match self.sort_dir.as_deref().map(str::trim) {
            Some("asc") => SortDir::Asc,
            _ => SortDir::Desc,
        };

        SortSpec { key, dir }
    }
}

/// One domain record as returned by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct DomainItem {
    pub domain: String,
    pub memorability: Option<f64>,
    pub pronunciation: Option<f64>,
    pub visual_appeal: Option<f64>,
    pub brandability: Option<f64>,
    pub average_score: Option<f64>,
    pub price: Option<f64>,
    pub price_type: Option<PriceType>,
}

impl From<DomainRecord> for DomainItem {
    fn from(record: DomainRecord) -> Self {
        Self {
            domain: record.domain,
            memorability: record.memorability,
            pronunciation: record.pronunciation,
            visual_appeal: record.visual_appeal,
            brandability: record.brandability,
            average_score: record.average_score,
            price: record.price,
            price_type: record.price_type,
        }
    }
}
