//! Calendar-day periods for registry records
//!
//! Registry facts such as residencies are recorded with day precision.
//! A [`ResidencyPeriod`] is an inclusive span of days whose end may still be
//! unknown (an open period).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

/// Returns the calendar day immediately preceding `date`
///
/// # Errors
///
/// Returns `TemporalError::DateOutOfRange` if `date` is the first
/// representable day.
pub fn day_before(date: NaiveDate) -> Result<NaiveDate, TemporalError> {
    date.checked_sub_days(Days::new(1))
        .ok_or_else(|| TemporalError::DateOutOfRange(format!("no day precedes {}", date)))
}

/// An inclusive span of calendar days
///
/// Both `start` and `end` are part of the period. A period without an end
/// is open and contains every day from `start` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResidencyPeriod {
    /// First day of the period (inclusive)
    pub start: NaiveDate,
    /// Last day of the period (inclusive), None means still open
    pub end: Option<NaiveDate>,
}

impl ResidencyPeriod {
    /// Creates an open period starting on the given day
    pub fn open(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Creates a closed period
    ///
    /// # Errors
    ///
    /// Returns `TemporalError::InvalidPeriod` if `end` is before `start`
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if end < start {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end: Some(end) })
    }

    /// Builds a period from raw record dates without checking their order
    ///
    /// Historical records are stored as given; use [`ResidencyPeriod::is_inverted`]
    /// to detect spans whose end precedes their start.
    pub fn from_dates(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Returns true if the period has no end date
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Returns true if the end date precedes the start date
    pub fn is_inverted(&self) -> bool {
        self.end.map_or(false, |end| end < self.start)
    }

    /// Returns true if the given day falls within the period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |end| date <= end)
    }

    /// Returns true if the two periods share at least one day
    pub fn overlaps(&self, other: &ResidencyPeriod) -> bool {
        let self_end = self.end.unwrap_or(NaiveDate::MAX);
        let other_end = other.end.unwrap_or(NaiveDate::MAX);

        self.start <= other_end && other.start <= self_end
    }

    /// Returns the number of days in a closed period, counting both ends
    pub fn days(&self) -> Option<i64> {
        self.end.map(|end| (end - self.start).num_days() + 1)
    }
}
