//! Enrichment orchestration: the pricing and scoring passes.
//!
//! The only part of the system touching shared mutable state. Records to
//! enrich are selected with an "already enriched" guard (the repository
//! selects), external calls fan out per domain or per batch, and every
//! write goes through the repository; adapters never persist anything.
//! A failed call marks that record and never aborts the pass.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::domain::entities::{PriceQuote, PriceType};
use crate::domain::repositories::DomainRecordRepository;
use crate::error::AppError;
use crate::infrastructure::clients::{PricingClient, ScoringClient};

/// Outcome of one enrichment pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassSummary {
    /// Records updated, including ones marked with an Error outcome.
    pub processed: usize,
    /// Error outcomes: failed calls, unscored batch entries, write failures.
    pub errors: usize,
}

/// Drives the availability/pricing and scoring passes over the store.
pub struct EnrichmentService<R, P, S> {
    repository: Arc<R>,
    pricing: Arc<P>,
    scoring: Arc<S>,
    pricing_concurrency: usize,
    scoring_batch_size: usize,
}

impl<R, P, S> EnrichmentService<R, P, S>
where
    R: DomainRecordRepository + 'static,
    P: PricingClient + 'static,
    S: ScoringClient + 'static,
{
    /// Creates a new enrichment service.
    ///
    /// `pricing_concurrency` bounds in-flight pricing calls;
    /// `scoring_batch_size` sets domains per scoring request. Both are
    /// deployment parameters, not invariants.
    pub fn new(
        repository: Arc<R>,
        pricing: Arc<P>,
        scoring: Arc<S>,
        pricing_concurrency: usize,
        scoring_batch_size: usize,
    ) -> Self {
        Self {
            repository,
            pricing,
            scoring,
            pricing_concurrency: pricing_concurrency.max(1),
            scoring_batch_size: scoring_batch_size.max(1),
        }
    }

    /// Prices up to `limit` unpriced domains (Error rows retry too; a
    /// successful retry overwrites the Error state).
    ///
    /// Calls run concurrently under a semaphore; results are written as
    /// they complete. A transport failure becomes a terminal Error quote
    /// for that domain within this pass.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only for store-level failures around
    /// the pass itself; per-domain failures are folded into the summary.
    pub async fn run_pricing_pass(&self, limit: i64) -> Result<PassSummary, AppError> {
        let domains = self.repository.find_unpriced(limit).await?;
        tracing::info!(count = domains.len(), "starting pricing pass");

        let semaphore = Arc::new(Semaphore::new(self.pricing_concurrency));
        let mut tasks: JoinSet<(String, PriceQuote)> = JoinSet::new();

        for domain in domains {
            let semaphore = semaphore.clone();
            let pricing = self.pricing.clone();
            tasks.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return (domain, PriceQuote::error("concurrency limiter closed")),
                };
                let quote = match pricing.check(&domain).await {
                    Ok(quote) => quote,
                    Err(e) => {
                        tracing::warn!(domain = %domain, "pricing check failed: {e}");
                        PriceQuote::error(e.to_string())
                    }
                };
                (domain, quote)
            });
        }

        let mut summary = PassSummary::default();
        while let Some(joined) = tasks.join_next().await {
            let (domain, quote) = match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("pricing task failed: {e}");
                    summary.errors += 1;
                    continue;
                }
            };

            if quote.price_type == PriceType::Error {
                summary.errors += 1;
            }

            match self.repository.apply_price(&domain, &quote).await {
                Ok(()) => summary.processed += 1,
                Err(e) => {
                    tracing::warn!(domain = %domain, "failed to store quote: {e:?}");
                    summary.errors += 1;
                }
            }
        }

        tracing::info!(
            processed = summary.processed,
            errors = summary.errors,
            "pricing pass finished"
        );
        Ok(summary)
    }

    /// Scores up to `limit` unscored domains in batches.
    ///
    /// The average score is computed here in the core (via
    /// [`crate::domain::entities::ScoreSet::average`] inside the store
    /// write), never taken from the adapter. A failed batch leaves its
    /// records unscored for a later pass.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only for store-level failures around
    /// the pass itself.
    pub async fn run_scoring_pass(&self, limit: i64) -> Result<PassSummary, AppError> {
        let domains = self.repository.find_unscored(limit).await?;
        tracing::info!(count = domains.len(), "starting scoring pass");

        let mut summary = PassSummary::default();

        for batch in domains.chunks(self.scoring_batch_size) {
            let results = match self.scoring.score_batch(batch).await {
                Ok(results) => results,
                Err(e) => {
                    tracing::warn!(batch = batch.len(), "scoring batch failed: {e}");
                    summary.errors += batch.len();
                    continue;
                }
            };

            for result in results {
                let Some(scores) = result.scores else {
                    tracing::warn!(domain = %result.domain, "no scores returned");
                    summary.errors += 1;
                    continue;
                };

                match self.repository.apply_scores(&result.domain, &scores).await {
                    Ok(()) => summary.processed += 1,
                    Err(e) => {
                        tracing::warn!(domain = %result.domain, "failed to store scores: {e:?}");
                        summary.errors += 1;
                    }
                }
            }
        }

        tracing::info!(
            processed = summary.processed,
            errors = summary.errors,
            "scoring pass finished"
        );
        Ok(summary)
    }
}
