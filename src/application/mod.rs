//! Application layer containing business logic services.
//!
//! Services orchestrate domain operations: they wire repository and client
//! traits together and hold the workflow logic, keeping the domain layer
//! free of IO concerns.

pub mod services;
