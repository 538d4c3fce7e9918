//! Pre-built Test Fixtures
//!
//! Provides the registry's default test values. Dates are relative to the
//! current day so that default persons are always twenty years old.

use chrono::{Days, Months, NaiveDate, Utc};
use core_kernel::{AreaCode, IdentityCode};

/// Fixture for person test data
pub struct PersonFixtures;

impl PersonFixtures {
    /// Default identity code
    pub fn identity_code() -> IdentityCode {
        IdentityCode::new("12345678-AAAA")
    }

    /// Default first name
    pub fn first_name() -> &'static str {
        "Tom"
    }

    /// Default last name
    pub fn last_name() -> &'static str {
        "TestPerson"
    }

    /// Default birth date, twenty years ago
    pub fn time_of_birth() -> NaiveDate {
        TemporalFixtures::today()
            .checked_sub_months(Months::new(20 * 12))
            .unwrap()
    }

    /// Default death date, yesterday
    pub fn time_of_death() -> NaiveDate {
        TemporalFixtures::days_from_today(-1)
    }
}

/// Fixture for address test data
pub struct AddressFixtures;

impl AddressFixtures {
    /// Default address name
    pub fn name() -> &'static str {
        "TestAddress 1 A1"
    }

    /// Name of the address used for a second move
    pub fn second_name() -> &'static str {
        "TestAddress2"
    }

    /// Default area code
    pub fn area_code() -> AreaCode {
        AreaCode::new("00100")
    }

    /// Area code that differs from the default
    pub fn other_area_code() -> AreaCode {
        AreaCode::new("40100")
    }
}

/// Fixture for parent test data: (identity code, first name, last name)
pub struct ParentFixtures;

impl ParentFixtures {
    pub fn polly() -> (&'static str, &'static str, &'static str) {
        ("11111", "Polly", "Parent")
    }

    pub fn pat() -> (&'static str, &'static str, &'static str) {
        ("22222", "Pat", "Parent")
    }

    pub fn peter() -> (&'static str, &'static str, &'static str) {
        ("33333", "Peter", "Parent")
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The current UTC day
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Day offset from today; negative offsets are in the past
    pub fn days_from_today(offset: i64) -> NaiveDate {
        let today = Self::today();
        let days = Days::new(offset.unsigned_abs());
        if offset >= 0 {
            today.checked_add_days(days).unwrap()
        } else {
            today.checked_sub_days(days).unwrap()
        }
    }

    /// Fixed move-in date for deterministic history tests
    pub fn first_move_in() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }
}
