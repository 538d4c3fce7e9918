//! Population domain errors
//!
//! This module defines the error types raised by the registry model.
//! Only rule violations are errors; lookups that find nothing return
//! `None` or `false` instead.

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::TemporalError;

/// Errors that can occur in the population domain
#[derive(Debug, Error)]
pub enum PopulationError {
    /// The requested mutation would break a registry rule
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A move-in date does not follow the current residency's move-in date
    #[error("Move-in date {move_in} is not after current move-in date {current_move_in}")]
    InvalidMoveInDate {
        move_in: NaiveDate,
        current_move_in: NaiveDate,
    },

    /// Date arithmetic left the representable calendar
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    /// Registry configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PopulationError {
    /// Creates an InvalidOperation error with a message
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        PopulationError::InvalidOperation(message.into())
    }

    /// Creates the error raised when a third parent is added
    pub fn too_many_parents() -> Self {
        PopulationError::InvalidOperation("Only two parents permitted!".to_string())
    }
}
