//! Repository trait for candidate domain records.

use crate::domain::entities::{DomainRecord, PriceQuote, PriceType, ScoreSet};
use crate::error::AppError;
use async_trait::async_trait;

/// Filter criteria for domain queries, combined with logical AND.
///
/// Numeric thresholds use `0` as an explicit "no limit" sentinel rather than
/// a literal bound, so a zeroed filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct DomainFilter {
    /// Case-insensitive substring match against the full domain string.
    pub search: Option<String>,
    /// Exact match against the suffix after the last dot.
    pub tld: Option<String>,
    /// Minimum average score; records without an average are excluded when > 0.
    pub min_score: f64,
    /// Only records with a pricing result.
    pub priced_only: bool,
    /// Exact price classification match.
    pub price_type: Option<PriceType>,
    /// Maximum price; 0 means no limit.
    pub max_price: f64,
}

impl DomainFilter {
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    pub fn with_tld(mut self, tld: Option<String>) -> Self {
        self.tld = tld;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_price(
        mut self,
        priced_only: bool,
        price_type: Option<PriceType>,
        max_price: f64,
    ) -> Self {
        self.priced_only = priced_only;
        self.price_type = price_type;
        self.max_price = max_price;
        self
    }
}

/// Sortable columns of the domain record view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Domain,
    Memorability,
    Pronunciation,
    VisualAppeal,
    Brandability,
    #[default]
    AverageScore,
    Price,
}

impl SortKey {
    /// Column name in the `domain_results` table. Whitelisted: sort input
    /// never reaches SQL as raw text.
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Domain => "domain",
            SortKey::Memorability => "memorability",
            SortKey::Pronunciation => "pronunciation",
            SortKey::VisualAppeal => "visual_appeal",
            SortKey::Brandability => "brandability",
            SortKey::AverageScore => "average_score",
            SortKey::Price => "price",
        }
    }

    /// Parses a query-string value; unknown names fall back to the default.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "domain" => SortKey::Domain,
            "memorability" => SortKey::Memorability,
            "pronunciation" => SortKey::Pronunciation,
            "visual_appeal" => SortKey::VisualAppeal,
            "brandability" => SortKey::Brandability,
            "average_score" => SortKey::AverageScore,
            "price" => SortKey::Price,
            _ => SortKey::default(),
        }
    }
}

/// Sort direction. Nulls sort last regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    pub fn sql(&self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// A complete sort specification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub dir: SortDir,
}

/// Per-TLD record count.
#[derive(Debug, Clone)]
pub struct TldCount {
    pub tld: String,
    pub count: i64,
}

/// Count and mean price for one price classification.
#[derive(Debug, Clone)]
pub struct PriceTypeStats {
    pub price_type: PriceType,
    pub count: i64,
    pub avg_price: Option<f64>,
}

/// Mean sub-scores over records that have been scored.
#[derive(Debug, Clone, Default)]
pub struct ScoreAverages {
    pub avg_average_score: Option<f64>,
    pub avg_memorability: Option<f64>,
    pub avg_pronunciation: Option<f64>,
    pub avg_visual_appeal: Option<f64>,
    pub avg_brandability: Option<f64>,
}

/// Aggregate statistics over the whole store.
///
/// `price_stats` covers priced records excluding Error rows; those surface
/// separately in `errors`.
#[derive(Debug, Clone)]
pub struct DomainStats {
    pub total: i64,
    pub averages: ScoreAverages,
    pub tlds: Vec<TldCount>,
    pub price_stats: Vec<PriceTypeStats>,
    pub errors: i64,
}

/// Repository interface for the domain record store.
///
/// The store is the sole writer of persisted state: adapters return values
/// and the orchestration layer applies them through these methods.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteDomainRecordRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRecordRepository: Send + Sync {
    /// Inserts candidate domains, ignoring ones already present.
    ///
    /// Returns the number of rows actually inserted, so re-seeding is
    /// idempotent and reports only new candidates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_candidates(&self, domains: &[String]) -> Result<u64, AppError>;

    /// Retrieves records matching the filter, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        filter: &DomainFilter,
        sort: &SortSpec,
    ) -> Result<Vec<DomainRecord>, AppError>;

    /// Computes aggregate statistics over all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn stats(&self) -> Result<DomainStats, AppError>;

    /// Domains with no pricing result yet, plus Error-marked ones eligible
    /// for retry. This select is the "already enriched" guard for the
    /// pricing pass.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_unpriced(&self, limit: i64) -> Result<Vec<String>, AppError>;

    /// Domains without a complete score set yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_unscored(&self, limit: i64) -> Result<Vec<String>, AppError>;

    /// Writes a pricing result onto the matching record, stamping
    /// `checked_at`. Overwrites any previous result, including Error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain has no record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn apply_price(&self, domain: &str, quote: &PriceQuote) -> Result<(), AppError>;

    /// Writes the four sub-scores and the core-computed average onto the
    /// matching record, stamping `scored_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the domain has no record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn apply_scores(&self, domain: &str, scores: &ScoreSet) -> Result<(), AppError>;

    /// Total number of records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Deletes every record. The only delete path; used by explicit reset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
