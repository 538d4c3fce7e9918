//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! population registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Default registry test values
//! - `builders`: Builder patterns for persons and addresses
//! - `assertions`: Assertion helpers for residency histories
//! - `generators`: Property-based test data generators
//! - `logging`: Tracing subscriber setup for tests

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_test_tracing;
