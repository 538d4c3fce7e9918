//! Address types

use std::fmt;

use serde::{Deserialize, Serialize};

use core_kernel::AreaCode;

/// A postal address
///
/// Addresses are plain values: two addresses are equal when both the name
/// and the area code match. `Clone` yields an independent snapshot that
/// compares equal to the original.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Street and building designation, e.g. "TestAddress 1 A1"
    pub name: String,
    /// Postal / area code
    pub area_code: AreaCode,
}

impl Address {
    /// Creates a new address
    pub fn new(name: impl Into<String>, area_code: impl Into<AreaCode>) -> Self {
        Self {
            name: name.into(),
            area_code: area_code.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn area_code(&self) -> &AreaCode {
        &self.area_code
    }

    pub fn set_area_code(&mut self, area_code: impl Into<AreaCode>) {
        self.area_code = area_code.into();
    }

    /// Formats address for single-line display
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.area_code)
    }
}
