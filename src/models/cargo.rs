//! Cargo shipment record.
//!
//! A cargo is a description, a weight, and a destination address,
//! with an optional assigned vehicle + driver pair. Assignment is
//! last-write-wins and there is no unassignment.
//!
//! The text form renders description, weight, and destination only.
//! The assigned pair is deliberately left out even when set; callers
//! that need it read it through [`Cargo::assignment`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use super::{Address, Employee, Vehicle};

/// A shipment with an optional vehicle/driver assignment.
///
/// Weight is a raw number and is not validated; negative values are
/// accepted and carried through unchanged.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Cargo;
///
/// let cargo = Cargo::new("Pszenica", 90.0, "Olsztyn", "Spacerowa");
/// assert!(cargo.assignment().is_none());
/// assert_eq!(
///     cargo.to_string(),
///     "Cargo{description=Pszenica, weight=90, destination=city=Olsztyn, street=Spacerowa}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    description: String,
    weight: f64,
    destination: Address,
    assignment: Option<(Rc<Vehicle>, Rc<Employee>)>,
}

impl Cargo {
    /// Creates an unassigned cargo bound for the given city/street.
    pub fn new(
        description: impl Into<String>,
        weight: f64,
        destination_city: impl Into<String>,
        destination_street: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            weight,
            destination: Address::new(destination_city, destination_street),
            assignment: None,
        }
    }

    /// Assigns a vehicle and driver to this cargo.
    ///
    /// Overwrites any prior assignment unconditionally. No check is
    /// made that the pair belongs to any branch, that the driver holds
    /// a driving role, or that the vehicle can carry the weight.
    pub fn assign_vehicle(&mut self, vehicle: Rc<Vehicle>, driver: Rc<Employee>) {
        self.assignment = Some((vehicle, driver));
    }

    /// Cargo description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cargo weight.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Destination address.
    pub fn destination(&self) -> &Address {
        &self.destination
    }

    /// The assigned vehicle/driver pair, if any.
    pub fn assignment(&self) -> Option<&(Rc<Vehicle>, Rc<Employee>)> {
        self.assignment.as_ref()
    }
}

impl fmt::Display for Cargo {
    /// Renders `Cargo{description=<d>, weight=<w>, destination=<addr>}`.
    /// The assigned pair is never part of the text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cargo{{description={}, weight={}, destination={}}}",
            self.description, self.weight, self.destination
        )
    }
}
