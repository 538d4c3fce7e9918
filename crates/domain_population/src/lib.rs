//! Population Registry Domain
//!
//! This crate models people, addresses and the residency history that links
//! them, and enforces the registry rules on that model.
//!
//! # Entities
//!
//! - **Address**: a value identified by its name and area code
//! - **AddressInfo**: one residency of a person at an address, open while no
//!   move-out date is recorded
//! - **Person**: the aggregate root owning vital data, up to two parents and
//!   the residency history
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_population::{Address, Person, PopulationError};
//!
//! let mother = Person::new("11111", "Polly", "Parent", NaiveDate::from_ymd_opt(1970, 3, 1).unwrap(), None);
//! let father = Person::new("22222", "Pat", "Parent", NaiveDate::from_ymd_opt(1968, 7, 9).unwrap(), None);
//! let other = Person::new("33333", "Peter", "Parent", NaiveDate::from_ymd_opt(1969, 1, 1).unwrap(), None);
//!
//! let mut child = Person::new("12345678-AAAA", "Tom", "TestPerson", NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(), None)
//!     .with_parents([mother, father])
//!     .unwrap();
//!
//! assert!(matches!(child.add_parent(other), Err(PopulationError::InvalidOperation(_))));
//!
//! child.add_address(Address::new("TestAddress 1 A1", "00100"), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).unwrap();
//! assert!(child.find_current_address().is_some());
//! ```

pub mod address;
pub mod address_info;
pub mod person;
pub mod config;
pub mod error;

pub use address::Address;
pub use address_info::AddressInfo;
pub use person::{Person, MAX_PARENTS};
pub use config::ResidencyConfig;
pub use error::PopulationError;
