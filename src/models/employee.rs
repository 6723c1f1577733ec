//! Employee model.
//!
//! An employee is a named person with a home address and exactly one
//! role out of a closed set: driver, mechanic, or manager. Each role
//! carries one role-specific attribute (license category, repaired
//! vehicle count, bonus).
//!
//! # Salary Model
//!
//! Salaries are flat amounts fixed per role. The role-specific
//! attributes are descriptive only and never enter the salary; in
//! particular, a manager's bonus does not change the returned amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Address;

/// Employee role with its role-specific attribute.
///
/// The set is closed: every employee is exactly one of these three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// Drives vehicles; holds a driving license category (e.g., "B").
    Driver { license_category: String },
    /// Maintains vehicles; tracks how many it has repaired so far.
    Mechanic { repaired_vehicles: i32 },
    /// Runs a branch; has a contractual bonus on record.
    Manager { bonus: f64 },
}

impl Role {
    /// Monthly salary for this role.
    ///
    /// Flat per role: Driver = 4000, Mechanic = 6000, Manager = 9000.
    /// The role-specific attributes (license category, repair count,
    /// bonus) never change the amount.
    pub fn salary(&self) -> f64 {
        match self {
            Role::Driver { .. } => 4000.0,
            Role::Mechanic { .. } => 6000.0,
            Role::Manager { .. } => 9000.0,
        }
    }
}

/// A company employee.
///
/// Employees are shared between holders by `Rc` handle: the same
/// instance can sit in a branch roster and be passed around for
/// servicing work without being copied.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Employee;
///
/// let driver = Employee::driver("Andrzej", "Warszawa", "Aleja Rzeczypospolitej 3A", "B");
/// assert_eq!(driver.salary(), 4000.0);
/// assert_eq!(driver.address().city(), "Warszawa");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    address: Address,
    role: Role,
}

impl Employee {
    /// Creates an employee with an explicit address and role.
    pub fn new(name: impl Into<String>, address: Address, role: Role) -> Self {
        Self {
            name: name.into(),
            address,
            role,
        }
    }

    /// Creates a driver living at the given city/street.
    pub fn driver(
        name: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        license_category: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            Address::new(city, street),
            Role::Driver {
                license_category: license_category.into(),
            },
        )
    }

    /// Creates a mechanic living at the given city/street.
    pub fn mechanic(
        name: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        repaired_vehicles: i32,
    ) -> Self {
        Self::new(
            name,
            Address::new(city, street),
            Role::Mechanic { repaired_vehicles },
        )
    }

    /// Creates a manager living at the given city/street.
    pub fn manager(
        name: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        bonus: f64,
    ) -> Self {
        Self::new(name, Address::new(city, street), Role::Manager { bonus })
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Home address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Role and its role-specific attribute.
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Monthly salary. See [`Role::salary`] for the per-role amounts.
    pub fn salary(&self) -> f64 {
        self.role.salary()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee{{name={}, address={}", self.name, self.address)?;
        match &self.role {
            Role::Driver { license_category } => {
                write!(f, ", licenseCategory={license_category}}}")
            }
            Role::Mechanic { repaired_vehicles } => {
                write!(f, ", repairedVehicles={repaired_vehicles}}}")
            }
            Role::Manager { bonus } => write!(f, ", bonus={bonus}}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_fixed_per_role() {
        assert_eq!(Employee::driver("A", "X", "Y", "B").salary(), 4000.0);
        assert_eq!(Employee::mechanic("B", "X", "Y", 0).salary(), 6000.0);
        assert_eq!(Employee::manager("C", "X", "Y", 0.0).salary(), 9000.0);
    }

    #[test]
    fn test_salary_ignores_other_fields() {
        // Only the role tag matters
        let d1 = Employee::driver("Andrzej", "Warszawa", "ul. Długa", "B");
        let d2 = Employee::driver("Zofia", "Gdańsk", "ul. Morska 1", "C+E");
        assert_eq!(d1.salary(), d2.salary());

        let m1 = Employee::mechanic("Mikołaj", "Warszawa", "ul. Prosta", 0);
        let m2 = Employee::mechanic("Mikołaj", "Warszawa", "ul. Prosta", 10_000);
        assert_eq!(m1.salary(), m2.salary());
    }

    #[test]
    fn test_manager_bonus_not_added() {
        let plain = Employee::manager("Jacek", "Warszawa", "ul. Wspólna", 0.0);
        let rich = Employee::manager("Jacek", "Warszawa", "ul. Wspólna", 90_000.0);
        assert_eq!(plain.salary(), 9000.0);
        assert_eq!(rich.salary(), 9000.0); // bonus is on record only
    }

    #[test]
    fn test_driver_scenario() {
        let e = Employee::driver("Andrzej", "Warszawa", "Aleja Rzeczypospolitej 3A", "B");
        assert_eq!(e.salary(), 4000.0);
        let text = e.to_string();
        assert!(text.contains("name=Andrzej"));
        assert!(text.contains("licenseCategory=B"));
        assert!(text.contains("city=Warszawa"));
    }

    #[test]
    fn test_render_role_field() {
        let m = Employee::mechanic("Mikołaj", "Warszawa", "ul. Prosta", 12);
        assert_eq!(
            m.to_string(),
            "Employee{name=Mikołaj, address=city=Warszawa, street=ul. Prosta, repairedVehicles=12}"
        );

        let mgr = Employee::manager("Jacek", "Warszawa", "ul. Wspólna", 90_000.0);
        assert!(mgr.to_string().ends_with("bonus=90000}"));
    }

    #[test]
    fn test_role_serde_round_trip() {
        let role = Role::Driver {
            license_category: "B".into(),
        };
        let json = serde_json::to_string(&role).unwrap();
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
