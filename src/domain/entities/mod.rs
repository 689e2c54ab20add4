//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns:
//! the persisted [`DomainRecord`], the adapter result types
//! ([`PriceQuote`], [`DomainScores`]), and the [`ScoreSet`] whose
//! existence guarantees a defined average score.

pub mod domain_record;

pub use domain_record::{DomainRecord, DomainScores, PriceQuote, PriceType, ScoreSet};
