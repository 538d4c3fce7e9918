//! Test Data Builders
//!
//! Provides builder patterns for constructing registry entities with
//! sensible defaults. Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{AreaCode, IdentityCode};
use domain_population::{Address, Person};

use crate::fixtures::{AddressFixtures, ParentFixtures, PersonFixtures};

/// Builder for constructing test persons
pub struct TestPersonBuilder {
    identity_code: IdentityCode,
    first_name: String,
    last_name: String,
    time_of_birth: NaiveDate,
    time_of_death: Option<NaiveDate>,
    parents: Vec<Person>,
}

impl Default for TestPersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPersonBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            identity_code: PersonFixtures::identity_code(),
            first_name: PersonFixtures::first_name().to_string(),
            last_name: PersonFixtures::last_name().to_string(),
            time_of_birth: PersonFixtures::time_of_birth(),
            time_of_death: None,
            parents: Vec::new(),
        }
    }

    /// Sets the identity code
    pub fn with_identity_code(mut self, code: impl Into<IdentityCode>) -> Self {
        self.identity_code = code.into();
        self
    }

    /// Sets first and last name
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the birth date
    pub fn with_time_of_birth(mut self, date: NaiveDate) -> Self {
        self.time_of_birth = date;
        self
    }

    /// Sets the death date
    pub fn with_time_of_death(mut self, date: NaiveDate) -> Self {
        self.time_of_death = Some(date);
        self
    }

    /// Marks the person deceased as of yesterday
    pub fn deceased(mut self) -> Self {
        self.time_of_death = Some(PersonFixtures::time_of_death());
        self
    }

    /// Adds a parent
    pub fn with_parent(mut self, parent: Person) -> Self {
        self.parents.push(parent);
        self
    }

    /// Builds the person
    ///
    /// # Panics
    ///
    /// Panics if more than two parents were given
    pub fn build(self) -> Person {
        Person::new(
            self.identity_code,
            self.first_name,
            self.last_name,
            self.time_of_birth,
            self.time_of_death,
        )
        .with_parents(self.parents)
        .expect("Test person has too many parents")
    }
}

/// Builder for constructing test addresses
pub struct TestAddressBuilder {
    name: String,
    area_code: AreaCode,
}

impl Default for TestAddressBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAddressBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: AddressFixtures::name().to_string(),
            area_code: AddressFixtures::area_code(),
        }
    }

    /// Sets the address name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the area code
    pub fn with_area_code(mut self, area_code: impl Into<AreaCode>) -> Self {
        self.area_code = area_code.into();
        self
    }

    /// Builds the address
    pub fn build(self) -> Address {
        Address::new(self.name, self.area_code)
    }
}

/// Creates a default living person
pub fn create_person() -> Person {
    TestPersonBuilder::new().build()
}

/// Creates a default person, deceased yesterday when `is_dead` is set
pub fn create_person_with_status(is_dead: bool) -> Person {
    let builder = TestPersonBuilder::new();
    let builder = if is_dead { builder.deceased() } else { builder };
    builder.build()
}

/// Creates a person with the given identity and names and the default birth date
pub fn create_named_person(
    identity_code: &str,
    first_name: &str,
    last_name: &str,
    is_dead: bool,
) -> Person {
    let builder = TestPersonBuilder::new()
        .with_identity_code(identity_code)
        .with_name(first_name, last_name);
    let builder = if is_dead { builder.deceased() } else { builder };
    builder.build()
}

/// Creates one of the three fixture parents
pub fn create_parent(fixture: (&str, &str, &str)) -> Person {
    let (code, first_name, last_name) = fixture;
    create_named_person(code, first_name, last_name, false)
}

/// Creates the three distinct fixture parents
pub fn create_parents() -> [Person; 3] {
    [
        create_parent(ParentFixtures::polly()),
        create_parent(ParentFixtures::pat()),
        create_parent(ParentFixtures::peter()),
    ]
}

/// Creates the default address
pub fn create_address() -> Address {
    TestAddressBuilder::new().build()
}

/// Creates an address with the given name and the default area code
pub fn create_address_named(name: &str) -> Address {
    TestAddressBuilder::new().with_name(name).build()
}
