//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime query building for the dynamic filter surface.

pub mod sqlite_domain_record_repository;

pub use sqlite_domain_record_repository::SqliteDomainRecordRepository;
