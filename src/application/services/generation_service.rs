//! Candidate generation and seeding service.

use std::sync::Arc;

use crate::domain::assembler::{TLDS, assemble};
use crate::domain::generator::{Category, roots};
use crate::domain::repositories::DomainRecordRepository;
use crate::error::AppError;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedSummary {
    /// Candidates assembled across all requested categories.
    pub candidates: usize,
    /// Rows actually inserted; re-runs skip existing candidates.
    pub inserted: u64,
}

/// Seeds the record store with assembled candidate domains.
///
/// Generation is pure and deterministic; the only side effect is the
/// insert, which ignores candidates that already have a row, so seeding is
/// safe to repeat.
pub struct GenerationService<R: DomainRecordRepository> {
    repository: Arc<R>,
}

impl<R: DomainRecordRepository> GenerationService<R> {
    /// Creates a new generation service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Generates the requested categories, assembles them against the
    /// static TLD list, and inserts one record per candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn seed(&self, categories: &[Category]) -> Result<SeedSummary, AppError> {
        let mut summary = SeedSummary::default();

        for &category in categories {
            let category_roots = roots(category);
            let candidates = assemble(&category_roots, &TLDS);

            tracing::info!(
                category = category.as_str(),
                roots = category_roots.len(),
                candidates = candidates.len(),
                "seeding category"
            );

            summary.candidates += candidates.len();
            summary.inserted += self.repository.insert_candidates(&candidates).await?;
        }

        Ok(summary)
    }
}
