//! Domain layer: entities, the pure candidate generator, and repository traits.
//!
//! # Architecture
//!
//! - [`alphabet`] - The fixed 36-symbol alphabet
//! - [`generator`] - Category enumerations over the alphabet
//! - [`assembler`] - Root x TLD cross product
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The generator and assembler are pure and total: same alphabet and TLD
//! configuration in, same sequences out, no error paths. All shared mutable
//! state lives behind the repository trait, implemented by the
//! infrastructure layer.

pub mod alphabet;
pub mod assembler;
pub mod entities;
pub mod generator;
pub mod repositories;
