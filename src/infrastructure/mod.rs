//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer: SQLite persistence
//! and the outbound registrar/scoring HTTP clients.
//!
//! # Modules
//!
//! - [`clients`] - Registrar pricing and AI scoring adapters
//! - [`persistence`] - SQLite repository implementations

pub mod clients;
pub mod persistence;
