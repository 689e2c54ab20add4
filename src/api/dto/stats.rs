//! DTOs for the aggregate statistics endpoint.

use serde::Serialize;

use crate::domain::repositories::{DomainStats, PriceTypeStats, ScoreAverages, TldCount};

/// Aggregate statistics over the whole record store.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: i64,
    pub averages: AveragesItem,
    pub tlds: Vec<TldCountItem>,
    pub price_stats: Vec<PriceTypeItem>,
    /// Records whose last pricing attempt failed. Kept out of `price_stats`
    /// so "priced domains" never counts failures.
    pub errors: i64,
}

/// Mean sub-scores over scored records; null when nothing is scored yet.
#[derive(Debug, Serialize)]
pub struct AveragesItem {
    pub avg_average_score: Option<f64>,
    pub avg_memorability: Option<f64>,
    pub avg_pronunciation: Option<f64>,
    pub avg_visual_appeal: Option<f64>,
    pub avg_brandability: Option<f64>,
}

/// Record count for one TLD.
#[derive(Debug, Serialize)]
pub struct TldCountItem {
    pub tld: String,
    pub count: i64,
}

/// Count and mean price for one price classification.
#[derive(Debug, Serialize)]
pub struct PriceTypeItem {
    pub price_type: String,
    pub count: i64,
    pub avg_price: Option<f64>,
}

impl From<DomainStats> for StatsResponse {
    fn from(stats: DomainStats) -> Self {
        Self {
            total: stats.total,
            averages: stats.averages.into(),
            tlds: stats.tlds.into_iter().map(Into::into).collect(),
            price_stats: stats.price_stats.into_iter().map(Into::into).collect(),
            errors: stats.errors,
        }
    }
}

impl From<ScoreAverages> for AveragesItem {
    fn from(averages: ScoreAverages) -> Self {
        Self {
            avg_average_score: averages.avg_average_score,
            avg_memorability: averages.avg_memorability,
            avg_pronunciation: averages.avg_pronunciation,
            avg_visual_appeal: averages.avg_visual_appeal,
            avg_brandability: averages.avg_brandability,
        }
    }
}

impl From<TldCount> for TldCountItem {
    fn from(tld: TldCount) -> Self {
        Self {
            tld: tld.tld,
            count: tld.count,
        }
    }
}

impl From<PriceTypeStats> for PriceTypeItem {
    fn from(stats: PriceTypeStats) -> Self {
        Self {
            price_type: stats.price_type.to_string(),
            count: stats.count,
            avg_price: stats.avg_price,
        }
    }
}
