//! Custom Test Assertions
//!
//! Provides assertion helpers for residency histories that give more
//! meaningful failure messages than standard assertions.

use chrono::NaiveDate;
use domain_population::{Address, Person};

/// Asserts that the person currently lives at the given address
///
/// # Panics
///
/// Panics if the person has no current residency or it is elsewhere
pub fn assert_current_address(person: &Person, expected: &Address) {
    let current = person.find_current_address().unwrap_or_else(|| {
        panic!("{} has no current address", person.identity_code())
    });
    assert_eq!(
        current.address(),
        expected,
        "Current address of {} is {}, expected {}",
        person.identity_code(),
        current.address(),
        expected
    );
    assert!(current.move_out_date().is_none());
}

/// Asserts that the most recent residency at `address` closed on `move_out`
pub fn assert_moved_out_on(person: &Person, address: &Address, move_out: NaiveDate) {
    let info = person.find_address_info_by_address(address).unwrap_or_else(|| {
        panic!("{} never lived at {}", person.identity_code(), address)
    });
    assert_eq!(
        info.move_out_date(),
        Some(move_out),
        "Residency of {} at {} has move-out {:?}, expected {}",
        person.identity_code(),
        address,
        info.move_out_date(),
        move_out
    );
}

/// Asserts that at most one residency in the history is open
pub fn assert_single_current_residency(person: &Person) {
    let open = person.addresses().iter().filter(|info| info.is_current()).count();
    assert!(
        open <= 1,
        "{} has {} current residencies",
        person.identity_code(),
        open
    );
}

/// Asserts that each closed residency ends the day before the next move-in
///
/// Walks the history from oldest to newest.
pub fn assert_history_contiguous(person: &Person) {
    let history = person.addresses();
    for pair in history.windows(2) {
        let (newer, older) = (&pair[0], &pair[1]);
        let expected = newer.move_in_date().pred_opt();
        assert_eq!(
            older.move_out_date(),
            expected,
            "Residency at {} should end the day before the move to {}",
            older.address(),
            newer.address()
        );
    }
}

/// Asserts every residency record belongs to the person
pub fn assert_history_owned(person: &Person) {
    for info in person.addresses() {
        assert!(
            info.is_resident(person),
            "Record at {} belongs to {}, not {}",
            info.address(),
            info.resident(),
            person.identity_code()
        );
    }
}

/// Asserts the parent identity codes, in order
pub fn assert_parent_codes(person: &Person, expected: &[&str]) {
    let codes: Vec<&str> = person
        .parents()
        .iter()
        .map(|parent| parent.identity_code().as_str())
        .collect();
    assert_eq!(
        codes,
        expected,
        "Unexpected parents for {}",
        person.identity_code()
    );
}
