//! Logistics company model.
//!
//! The company is the top-level aggregate: a name, its branches, and
//! its cargo records. Branches and cargos are owned by value and moved
//! in; there are no copies to go stale. Mutating a stored branch
//! through [`LogisticsCompany::branches_mut`] is observed by the next
//! rendered report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Branch, Cargo};

/// The top-level company aggregate.
///
/// The text form is the full company report: name line, each branch's
/// block in insertion order, then each cargo's line in insertion
/// order.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{Branch, LogisticsCompany};
///
/// let mut company = LogisticsCompany::new("Transmax");
/// company.add_branch(Branch::new("Kraków", "Kraków", "ul. Wawelska"));
/// assert_eq!(company.branch_count(), 1);
/// assert!(company.to_string().starts_with("Transmax\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsCompany {
    name: String,
    branches: Vec<Branch>,
    cargos: Vec<Cargo>,
}

impl LogisticsCompany {
    /// Creates a company with no branches and no cargo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            branches: Vec::new(),
            cargos: Vec::new(),
        }
    }

    /// Company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a branch. The branch is moved in; further changes must
    /// go through [`branches_mut`](Self::branches_mut).
    pub fn add_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    /// Appends a cargo record.
    pub fn add_cargo(&mut self, cargo: Cargo) {
        self.cargos.push(cargo);
    }

    /// Branch view in insertion order.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Mutable branch view. Changes land on the stored branches
    /// themselves, not on copies.
    pub fn branches_mut(&mut self) -> &mut [Branch] {
        &mut self.branches
    }

    /// Number of branches.
    #[inline]
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Number of cargo records.
    #[inline]
    pub fn cargo_count(&self) -> usize {
        self.cargos.len()
    }
}

impl fmt::Display for LogisticsCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for branch in &self.branches {
            write!(f, "{branch}")?;
        }
        for cargo in &self.cargos {
            writeln!(f, "{cargo}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Vehicle};
    use std::rc::Rc;

    fn sample_company() -> LogisticsCompany {
        let mut krakow = Branch::new("Kraków", "Kraków", "ul. Wawelska");
        krakow.add_vehicle(Rc::new(Vehicle::car("Volkswagen Id4", 4)));

        let mut warszawa = Branch::new("Warszawa", "Warszawa", "ul. Długa");
        warszawa.add_employee(Rc::new(Employee::driver(
            "Andrzej",
            "Warszawa",
            "Aleja Rzeczypospolitej 3A",
            "B",
        )));
        warszawa.add_vehicle(Rc::new(Vehicle::bus("Solaris", 40)));

        let mut company = LogisticsCompany::new("Transmax");
        company.add_branch(krakow);
        company.add_branch(warszawa);
        company
    }

    #[test]
    fn test_report_order() {
        let mut company = sample_company();
        company.add_cargo(Cargo::new("Pszenica", 90.0, "Olsztyn", "Spacerowa"));
        let report = company.to_string();

        // Name, both branch blocks in insertion order, then the cargo line
        assert!(report.starts_with("Transmax\n"));
        let krakow = report.find("Branch Name: Kraków").unwrap();
        let warszawa = report.find("Branch Name: Warszawa").unwrap();
        let cargo = report.find("Cargo{description=Pszenica").unwrap();
        assert!(krakow < warszawa);
        assert!(warszawa < cargo);
        assert!(report.ends_with(
            "Cargo{description=Pszenica, weight=90, destination=city=Olsztyn, street=Spacerowa}\n"
        ));
    }

    #[test]
    fn test_branch_blocks_list_employees_then_vehicles() {
        let report = sample_company().to_string();
        let employees = report.find("- Employee{name=Andrzej").unwrap();
        let bus = report.find("- model=Solaris").unwrap();
        assert!(employees < bus);
    }

    #[test]
    fn test_counts() {
        let mut company = sample_company();
        assert_eq!(company.branch_count(), 2);
        assert_eq!(company.cargo_count(), 0);
        company.add_cargo(Cargo::new("Pszenica", 90.0, "Olsztyn", "Spacerowa"));
        assert_eq!(company.cargo_count(), 1);
    }

    #[test]
    fn test_mutation_after_insertion_is_observed() {
        let mut company = sample_company();
        assert!(!company.to_string().contains("Transmax 2"));

        // The stored branch itself gains the vehicle, not a copy
        company.branches_mut()[0].add_vehicle(Rc::new(Vehicle::truck("Transmax 2", 4000)));

        assert_eq!(company.branches()[0].vehicle_count(), 2);
        assert!(company.to_string().contains("model=Transmax 2, capacity=4000"));
    }

    #[test]
    fn test_empty_company_report_is_name_only() {
        let company = LogisticsCompany::new("Transmax");
        assert_eq!(company.to_string(), "Transmax\n");
    }
}
