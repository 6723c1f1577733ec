//! Address value type.
//!
//! Addresses are embedded by value wherever a location is needed:
//! an employee's home, a branch's site, a cargo destination.
//! They are immutable after construction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A city/street postal address.
///
/// Rendered as `city=<city>, street=<street>`.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Address;
///
/// let addr = Address::new("Warszawa", "ul. Długa");
/// assert_eq!(addr.to_string(), "city=Warszawa, street=ul. Długa");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    city: String,
    street: String,
}

impl Address {
    /// Creates a new address.
    pub fn new(city: impl Into<String>, street: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            street: street.into(),
        }
    }

    /// City name.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Street (and number, if any).
    pub fn street(&self) -> &str {
        &self.street
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={}, street={}", self.city, self.street)
    }
}
