//! Core Kernel - Foundational types shared by the population registry crates
//!
//! This crate provides the building blocks used by the domain model:
//! - Typed registry codes (identity codes, area codes)
//! - Day-precision periods for residency records and their errors

pub mod temporal;
pub mod identifiers;

pub use temporal::{ResidencyPeriod, TemporalError, day_before};
pub use identifiers::{IdentityCode, AreaCode};
