//! Test Utilities Crate
//!
//! Shared test infrastructure for the BunkCredit test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built test data for common entities
//! - `builders`: builder patterns for test data construction
//! - `assertions`: custom assertion helpers for domain types
//! - `generators`: property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
