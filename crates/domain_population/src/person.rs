//! Person aggregate and its registry rules
//!
//! A [`Person`] owns its residency history and holds shared references to
//! its parents. The rules that mutate those collections live here:
//!
//! - A person has at most two parents. Adding a third is rejected.
//! - At most one residency is current. Registering a new address closes the
//!   current one on the day before the new move-in date.
//! - Persons are equal when their identity codes are equal, whatever their
//!   other fields say.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_population::{Address, Person};
//!
//! let mut person = Person::new(
//!     "12345678-AAAA",
//!     "Tom",
//!     "TestPerson",
//!     NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
//!     None,
//! );
//!
//! let first = Address::new("TestAddress 1 A1", "00100");
//! let second = Address::new("TestAddress2", "00100");
//! person.add_address(first.clone(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
//! person.add_address(second.clone(), NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()).unwrap();
//!
//! let previous = person.find_address_info_by_address(&first).unwrap();
//! assert_eq!(previous.move_out_date(), NaiveDate::from_ymd_opt(2024, 1, 10));
//! assert_eq!(person.find_current_address().unwrap().address(), &second);
//! ```

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use core_kernel::{day_before, IdentityCode};
use crate::address::Address;
use crate::address_info::AddressInfo;
use crate::config::ResidencyConfig;
use crate::error::PopulationError;

/// Current law permits only two parents for a person
pub const MAX_PARENTS: usize = 2;

/// A person in the population registry
///
/// `parents` and `addresses` are only reachable read-only; they change
/// through [`Person::add_parent`], [`Person::remove_parent`] and
/// [`Person::add_address`], which keep the registry rules intact.
///
/// `Clone` copies the full record including residency history. Use
/// [`Person::copy_of`] for a copy without history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    identity_code: IdentityCode,
    first_name: String,
    last_name: String,
    time_of_birth: NaiveDate,
    time_of_death: Option<NaiveDate>,
    parents: Vec<Arc<Person>>,
    /// Most recent first
    addresses: Vec<AddressInfo>,
}

/// Unchecked wire form of a person, validated into [`Person`]
#[derive(Deserialize)]
struct PersonRecord {
    identity_code: IdentityCode,
    first_name: String,
    last_name: String,
    time_of_birth: NaiveDate,
    time_of_death: Option<NaiveDate>,
    #[serde(default)]
    parents: Vec<Arc<Person>>,
    #[serde(default)]
    addresses: Vec<AddressInfo>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = PopulationError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        if record.parents.len() > MAX_PARENTS {
            return Err(PopulationError::too_many_parents());
        }
        if record.addresses.iter().filter(|info| info.is_current()).count() > 1 {
            return Err(PopulationError::invalid_operation(
                "Only one current address permitted",
            ));
        }
        if let Some(foreign) = record
            .addresses
            .iter()
            .find(|info| info.resident() != &record.identity_code)
        {
            return Err(PopulationError::invalid_operation(format!(
                "Address history of {} contains a record of {}",
                record.identity_code,
                foreign.resident()
            )));
        }

        Ok(Self {
            identity_code: record.identity_code,
            first_name: record.first_name,
            last_name: record.last_name,
            time_of_birth: record.time_of_birth,
            time_of_death: record.time_of_death,
            parents: record.parents,
            addresses: record.addresses,
        })
    }
}

impl Person {
    /// Creates a person with unknown parents and no residency history
    pub fn new(
        identity_code: impl Into<IdentityCode>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        time_of_birth: NaiveDate,
        time_of_death: Option<NaiveDate>,
    ) -> Self {
        Self {
            identity_code: identity_code.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            time_of_birth,
            time_of_death,
            parents: Vec::new(),
            addresses: Vec::new(),
        }
    }

    /// Adds the given parents in order
    ///
    /// # Errors
    ///
    /// Returns `PopulationError::InvalidOperation` if the parents would
    /// exceed [`MAX_PARENTS`]
    pub fn with_parents<I, P>(mut self, parents: I) -> Result<Self, PopulationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Arc<Person>>,
    {
        for parent in parents {
            self.add_parent(parent)?;
        }
        Ok(self)
    }

    /// Creates a copy of the person without residency history
    ///
    /// Vital data is copied and the same parent records are shared. The
    /// copy compares equal to the original.
    pub fn copy_of(&self) -> Person {
        Self {
            identity_code: self.identity_code.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            time_of_birth: self.time_of_birth,
            time_of_death: self.time_of_death,
            parents: self.parents.clone(),
            addresses: Vec::new(),
        }
    }

    pub fn identity_code(&self) -> &IdentityCode {
        &self.identity_code
    }

    /// Changes the identity code, re-pointing the person's own residency records
    pub fn set_identity_code(&mut self, identity_code: impl Into<IdentityCode>) {
        self.identity_code = identity_code.into();
        for info in &mut self.addresses {
            info.set_resident(self.identity_code.clone());
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Returns the full name in "First Last" format
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn time_of_birth(&self) -> NaiveDate {
        self.time_of_birth
    }

    pub fn set_time_of_birth(&mut self, time_of_birth: NaiveDate) {
        self.time_of_birth = time_of_birth;
    }

    pub fn time_of_death(&self) -> Option<NaiveDate> {
        self.time_of_death
    }

    pub fn set_time_of_death(&mut self, time_of_death: Option<NaiveDate>) {
        self.time_of_death = time_of_death;
    }

    pub fn is_deceased(&self) -> bool {
        self.time_of_death.is_some()
    }

    /// Age in full years on the given day
    ///
    /// Returns `None` for days before birth or after death.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        if self.time_of_death.map_or(false, |death| date > death) {
            return None;
        }
        date.years_since(self.time_of_birth)
    }

    /// Parents in the order they were added
    pub fn parents(&self) -> &[Arc<Person>] {
        &self.parents
    }

    /// Returns true if the given person is registered as a parent
    pub fn has_parent(&self, parent: &Person) -> bool {
        self.parents.iter().any(|p| p.as_ref() == parent)
    }

    /// Adds a new parent for the person
    ///
    /// # Errors
    ///
    /// Returns `PopulationError::InvalidOperation` if the person already has
    /// two parents. The parent list is left unchanged.
    #[instrument(skip_all, fields(identity_code = %self.identity_code))]
    pub fn add_parent(&mut self, parent: impl Into<Arc<Person>>) -> Result<(), PopulationError> {
        let parent = parent.into();
        if self.parents.len() >= MAX_PARENTS {
            warn!(parent = %parent.identity_code, "Rejected parent, limit reached");
            return Err(PopulationError::too_many_parents());
        }

        debug!(parent = %parent.identity_code, "Adding parent");
        self.parents.push(parent);
        Ok(())
    }

    /// Removes the given person from the list of parents
    ///
    /// Parents are matched by identity code. Returns `true` if a parent was
    /// found and removed.
    #[instrument(skip_all, fields(identity_code = %self.identity_code))]
    pub fn remove_parent(&mut self, parent: &Person) -> bool {
        match self.parents.iter().position(|p| p.as_ref() == parent) {
            Some(index) => {
                self.parents.remove(index);
                debug!(parent = %parent.identity_code, "Removed parent");
                true
            }
            None => false,
        }
    }

    /// Residency history, most recent first
    pub fn addresses(&self) -> &[AddressInfo] {
        &self.addresses
    }

    /// Adds a new address for the person, closing the current one
    ///
    /// Uses the default (lenient) [`ResidencyConfig`]; see
    /// [`Person::add_address_with`].
    pub fn add_address(
        &mut self,
        address: Address,
        move_in_date: NaiveDate,
    ) -> Result<&AddressInfo, PopulationError> {
        self.add_address_with(address, move_in_date, &ResidencyConfig::default())
    }

    /// Adds a new address for the person, closing the current one
    ///
    /// The current residency, if any, gets the day before `move_in_date` as
    /// its move-out date. The new residency is placed first in the history
    /// and returned.
    ///
    /// A move-in date on or before the current residency's move-in date is
    /// accepted with a warning, unless `config.strict_chronology` is set.
    ///
    /// # Errors
    ///
    /// - `PopulationError::InvalidMoveInDate` in strict mode for a
    ///   non-increasing move-in date
    /// - `PopulationError::Temporal` if no day precedes `move_in_date`
    ///
    /// The history is unchanged when an error is returned.
    #[instrument(skip_all, fields(identity_code = %self.identity_code, move_in_date = %move_in_date))]
    pub fn add_address_with(
        &mut self,
        address: Address,
        move_in_date: NaiveDate,
        config: &ResidencyConfig,
    ) -> Result<&AddressInfo, PopulationError> {
        let info = AddressInfo::open(address, self, move_in_date);

        if let Some(current) = self.addresses.iter_mut().find(|info| info.is_current()) {
            let current_move_in = current.move_in_date();
            if move_in_date <= current_move_in {
                if config.strict_chronology {
                    return Err(PopulationError::InvalidMoveInDate {
                        move_in: move_in_date,
                        current_move_in,
                    });
                }
                warn!(%current_move_in, "Move-in date does not follow current residency");
            }

            let move_out_date = day_before(move_in_date)?;
            current.set_move_out_date(move_out_date);
            debug!(address = %current.address(), %move_out_date, "Closed current residency");
        }

        self.addresses.insert(0, info);
        Ok(&self.addresses[0])
    }

    /// Finds the current residency
    ///
    /// Scans the whole history and returns the first record without a
    /// move-out date.
    pub fn find_current_address(&self) -> Option<&AddressInfo> {
        self.addresses.iter().find(|info| info.is_current())
    }

    /// Finds the most recent residency at the given address
    pub fn find_address_info_by_address(&self, address: &Address) -> Option<&AddressInfo> {
        self.addresses.iter().find(|info| info.address() == address)
    }

    /// Finds the residency covering the given day
    pub fn address_on(&self, date: NaiveDate) -> Option<&AddressInfo> {
        self.addresses.iter().find(|info| info.was_resident_on(date))
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.identity_code == other.identity_code
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_code.hash(state);
    }
}
