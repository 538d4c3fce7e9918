//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating registry test data.

use chrono::{Duration, NaiveDate};
use core_kernel::{AreaCode, IdentityCode};
use domain_population::{Address, Person};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Strategy for generating dates between 1900 and roughly 2173
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..100_000i64).prop_map(|days| epoch() + Duration::days(days))
}

/// Strategy for generating identity codes in the registry's usual shape
pub fn identity_code_strategy() -> impl Strategy<Value = IdentityCode> {
    "[0-9]{8}-[A-Z]{4}".prop_map(|s| IdentityCode::new(s))
}

/// Strategy for generating five-digit area codes
pub fn area_code_strategy() -> impl Strategy<Value = AreaCode> {
    "[0-9]{5}".prop_map(|s| AreaCode::new(s))
}

/// Strategy for generating names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// Strategy for generating addresses
pub fn address_strategy() -> impl Strategy<Value = Address> {
    ("[A-Z][a-z]{3,12} [1-9][0-9]{0,2}", area_code_strategy())
        .prop_map(|(name, area_code)| Address::new(name, area_code))
}

/// Strategy for generating persons without parents or history
pub fn person_strategy() -> impl Strategy<Value = Person> {
    (identity_code_strategy(), name_strategy(), name_strategy(), date_strategy())
        .prop_map(|(code, first, last, birth)| Person::new(code, first, last, birth, None))
}

/// Strategy for generating strictly increasing move-in dates
pub fn increasing_move_ins_strategy(max_moves: usize) -> impl Strategy<Value = Vec<NaiveDate>> {
    (date_strategy(), proptest::collection::vec(1i64..3650i64, 1..=max_moves)).prop_map(
        |(start, gaps)| {
            gaps.iter()
                .scan(start, |date, gap| {
                    let current = *date;
                    *date = current + Duration::days(*gap);
                    Some(current)
                })
                .collect()
        },
    )
}

/// Strategy for generating a sequence of moves with arbitrary dates
pub fn moves_strategy(max_moves: usize) -> impl Strategy<Value = Vec<(Address, NaiveDate)>> {
    proptest::collection::vec((address_strategy(), date_strategy()), 0..=max_moves)
}
