//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod domain_record_repository;

pub use domain_record_repository::{
    DomainFilter, DomainRecordRepository, DomainStats, PriceTypeStats, ScoreAverages, SortDir,
    SortKey, SortSpec, TldCount,
};

#[cfg(test)]
pub use domain_record_repository::MockDomainRecordRepository;
