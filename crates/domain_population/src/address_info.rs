//! Residency records linking a person to an address
//!
//! An [`AddressInfo`] records that a resident lived at an address from a
//! move-in date and, once closed, until a move-out date. A record without a
//! move-out date is the resident's current address.
//!
//! Records are created by [`Person::add_address`](crate::person::Person::add_address)
//! and only ever move from open to closed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{IdentityCode, ResidencyPeriod};
use crate::address::Address;
use crate::person::Person;

/// A time-bounded residency of one person at one address
///
/// Equality compares the address by value, the resident by identity code and
/// both dates. Two move-out dates match only when both are absent or both are
/// present and equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressInfo {
    address: Address,
    resident: IdentityCode,
    move_in_date: NaiveDate,
    move_out_date: Option<NaiveDate>,
}

impl AddressInfo {
    /// Creates a residency record
    ///
    /// Dates are stored as given; their order is not validated.
    pub fn new(
        address: Address,
        resident: &Person,
        move_in_date: NaiveDate,
        move_out_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            address,
            resident: resident.identity_code().clone(),
            move_in_date,
            move_out_date,
        }
    }

    /// Creates an open residency record
    pub fn open(address: Address, resident: &Person, move_in_date: NaiveDate) -> Self {
        Self::new(address, resident, move_in_date, None)
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Identity code of the person this record belongs to
    pub fn resident(&self) -> &IdentityCode {
        &self.resident
    }

    pub(crate) fn set_resident(&mut self, resident: IdentityCode) {
        self.resident = resident;
    }

    /// Returns true if the given person is this record's resident
    pub fn is_resident(&self, person: &Person) -> bool {
        &self.resident == person.identity_code()
    }

    pub fn move_in_date(&self) -> NaiveDate {
        self.move_in_date
    }

    pub fn move_out_date(&self) -> Option<NaiveDate> {
        self.move_out_date
    }

    /// Closes the residency on the given day
    pub fn set_move_out_date(&mut self, move_out_date: NaiveDate) {
        self.move_out_date = Some(move_out_date);
    }

    /// Returns true while no move-out date is recorded
    pub fn is_current(&self) -> bool {
        self.move_out_date.is_none()
    }

    /// The residency as an inclusive day span
    pub fn period(&self) -> ResidencyPeriod {
        ResidencyPeriod::from_dates(self.move_in_date, self.move_out_date)
    }

    /// Returns true if the resident lived here on the given day
    pub fn was_resident_on(&self, date: NaiveDate) -> bool {
        self.period().contains(date)
    }
}
