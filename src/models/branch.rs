//! Branch model.
//!
//! A branch is a named site with an address, a roster of employees,
//! and a fleet of vehicles. Both collections are append-only and keep
//! insertion order; there is no removal and no de-duplication, so
//! adding the same handle twice records it twice.
//!
//! Employees and vehicles are held by `Rc` handle. The branch shares
//! ownership with whoever else keeps a handle to the same instance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use super::{Address, Employee, Vehicle};

/// A company branch holding a roster and a fleet.
///
/// The text form is a multi-line block: name, address, then every
/// employee and every vehicle in insertion order.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use u_fleet::models::{Branch, Vehicle};
///
/// let mut branch = Branch::new("Warszawa", "Warszawa", "ul. Długa");
/// branch.add_vehicle(Rc::new(Vehicle::car("Volkswagen Id3", 4)));
/// assert_eq!(branch.vehicle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    name: String,
    address: Address,
    employees: Vec<Rc<Employee>>,
    vehicles: Vec<Rc<Vehicle>>,
}

impl Branch {
    /// Creates an empty branch at the given city/street.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: Address::new(city, street),
            employees: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Branch name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Site address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Appends an employee to the roster. Never fails; duplicates are
    /// permitted.
    pub fn add_employee(&mut self, employee: Rc<Employee>) {
        self.employees.push(employee);
    }

    /// Appends a vehicle to the fleet. Never fails; duplicates are
    /// permitted.
    pub fn add_vehicle(&mut self, vehicle: Rc<Vehicle>) {
        self.vehicles.push(vehicle);
    }

    /// Roster view in insertion order.
    pub fn employees(&self) -> &[Rc<Employee>] {
        &self.employees
    }

    /// Fleet view in insertion order. The handles are shared, so
    /// callers can invoke vehicle operations directly on them.
    pub fn vehicles(&self) -> &[Rc<Vehicle>] {
        &self.vehicles
    }

    /// Number of employees on the roster.
    #[inline]
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Number of vehicles in the fleet.
    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch Name: {}", self.name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Employees:")?;
        for employee in &self.employees {
            writeln!(f, "  - {employee}")?;
        }
        writeln!(f, "Vehicles:")?;
        for vehicle in &self.vehicles {
            writeln!(f, "  - {vehicle}")?;
        }
        Ok(())
    }
}
