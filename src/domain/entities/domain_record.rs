//! Core entities for candidate domains and their enrichment results.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Registrar pricing classification for a candidate domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceType {
    Standard,
    Premium,
    Taken,
    Error,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Standard => "Standard",
            PriceType::Premium => "Premium",
            PriceType::Taken => "Taken",
            PriceType::Error => "Error",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(PriceType::Standard),
            "Premium" => Ok(PriceType::Premium),
            "Taken" => Ok(PriceType::Taken),
            "Error" => Ok(PriceType::Error),
            _ => Err(()),
        }
    }
}

/// Availability/pricing outcome for a single candidate domain.
///
/// Returned by the pricing adapter; the orchestration layer applies it to
/// the matching record. `Error` quotes are terminal for the current pass but
/// are retried on the next one, and a later success overwrites them.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price_type: PriceType,
    pub price: Option<f64>,
    pub detail: Option<String>,
}

impl PriceQuote {
    /// Available at the registrar's standard rate.
    pub fn standard(price: f64) -> Self {
        Self {
            price_type: PriceType::Standard,
            price: Some(price),
            detail: None,
        }
    }

    /// Available, but only at a premium price tier.
    pub fn premium(price: f64) -> Self {
        Self {
            price_type: PriceType::Premium,
            price: Some(price),
            detail: None,
        }
    }

    /// Already registered.
    pub fn taken() -> Self {
        Self {
            price_type: PriceType::Taken,
            price: None,
            detail: None,
        }
    }

    /// Transport or registrar failure; carries a diagnostic detail string.
    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            price_type: PriceType::Error,
            price: None,
            detail: Some(detail.into()),
        }
    }
}

/// A complete set of the four sub-scores for one domain.
///
/// Existence of a `ScoreSet` means all four sub-scores are present; the
/// average is therefore always defined and computed here, in the core,
/// because default sort order and stats aggregation rely on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSet {
    pub memorability: f64,
    pub pronunciation: f64,
    pub visual_appeal: f64,
    pub brandability: f64,
}

impl ScoreSet {
    /// Builds a score set only when all four sub-scores are present.
    pub fn from_parts(
        memorability: Option<f64>,
        pronunciation: Option<f64>,
        visual_appeal: Option<f64>,
        brandability: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            memorability: memorability?,
            pronunciation: pronunciation?,
            visual_appeal: visual_appeal?,
            brandability: brandability?,
        })
    }

    /// Arithmetic mean of the four sub-scores.
    pub fn average(&self) -> f64 {
        (self.memorability + self.pronunciation + self.visual_appeal + self.brandability) / 4.0
    }
}

/// Scoring adapter output for one domain within a batch.
///
/// `scores: None` marks a per-domain failure; it never aborts the batch.
#[derive(Debug, Clone)]
pub struct DomainScores {
    pub domain: String,
    pub scores: Option<ScoreSet>,
}

/// A persisted candidate domain with its enrichment state.
///
/// Created unenriched by the generation pass (one row per candidate), then
/// mutated in place by the pricing and scoring passes. Deleted only by an
/// explicit reset.
#[derive(Debug, Clone)]
pub struct DomainRecord {
    pub domain: String,
    pub memorability: Option<f64>,
    pub pronunciation: Option<f64>,
    pub visual_appeal: Option<f64>,
    pub brandability: Option<f64>,
    pub average_score: Option<f64>,
    pub price: Option<f64>,
    pub price_type: Option<PriceType>,
    pub error: Option<String>,
    pub checked_at: Option<DateTime<Utc>>,
    pub scored_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_type_round_trip() {
        for pt in [
            PriceType::Standard,
            PriceType::Premium,
            PriceType::Taken,
            PriceType::Error,
        ] {
            assert_eq!(pt.as_str().parse::<PriceType>().unwrap(), pt);
        }
        assert!("Filtered".parse::<PriceType>().is_err());
    }

    #[test]
    fn test_quote_constructors() {
        let q = PriceQuote::standard(12.5);
        assert_eq!(q.price_type, PriceType::Standard);
        assert_eq!(q.price, Some(12.5));

        let q = PriceQuote::taken();
        assert_eq!(q.price_type, PriceType::Taken);
        assert!(q.price.is_none());

        let q = PriceQuote::error("timeout");
        assert_eq!(q.price_type, PriceType::Error);
        assert_eq!(q.detail.as_deref(), Some("timeout"));
    }

    #[test]
    fn test_score_set_average() {
        let scores = ScoreSet {
            memorability: 8.0,
            pronunciation: 6.0,
            visual_appeal: 7.0,
            brandability: 9.0,
        };
        assert_eq!(scores.average(), 7.5);
    }

    #[test]
    fn test_score_set_requires_all_four() {
        assert!(ScoreSet::from_parts(Some(8.0), Some(6.0), Some(7.0), Some(9.0)).is_some());
        assert!(ScoreSet::from_parts(Some(8.0), None, Some(7.0), Some(9.0)).is_none());
        assert!(ScoreSet::from_parts(None, None, None, None).is_none());
    }

}
