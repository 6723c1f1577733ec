//! Demo: builds the Transmax company and prints its report.
//!
//! Output goes to stdout; progress logging goes to stderr and is
//! controlled by `RUST_LOG` (default `info`).

use std::io::{self, Write};
use std::rc::Rc;

use env_logger::Env;
use log::info;

use u_fleet::models::{Branch, Cargo, Employee, LogisticsCompany, Vehicle};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let (company, loaded_bus, mechanic) = build_company();
    info!(
        "built {} with {} branches and {} cargo record(s)",
        company.name(),
        company.branch_count(),
        company.cargo_count()
    );

    let stdout = io::stdout();
    write_demo(&company, &loaded_bus, &mechanic, &mut stdout.lock())?;
    info!("report written");
    Ok(())
}

/// Builds the demo company.
///
/// Returns the company together with two handles that stay live
/// outside it: the Kraków bus that received the cargo, and the
/// Warszawa mechanic who will service every vehicle. Both are the
/// same instances the branches hold.
fn build_company() -> (LogisticsCompany, Rc<Vehicle>, Rc<Employee>) {
    // Warszawa: three employees, a car and a bus
    let andrzej = Rc::new(Employee::driver(
        "Andrzej",
        "Warszawa",
        "Aleja Rzeczypospolitej 3A",
        "B",
    ));
    let mikolaj = Rc::new(Employee::mechanic("Mikołaj", "Warszawa", "ul. Prosta", 12));
    let jacek = Rc::new(Employee::manager("Jacek", "Warszawa", "ul. Wspólna", 90_000.0));
    let id3 = Rc::new(Vehicle::car("Volkswagen Id3", 4));
    let solaris = Rc::new(Vehicle::bus("Solaris", 40));

    let mut warszawa = Branch::new("Warszawa", "Warszawa", "ul. Długa");
    warszawa.add_employee(Rc::clone(&andrzej));
    warszawa.add_employee(Rc::clone(&mikolaj));
    warszawa.add_employee(Rc::clone(&jacek));
    warszawa.add_vehicle(Rc::clone(&id3));
    warszawa.add_vehicle(Rc::clone(&solaris));

    // Kraków: same shape, second bus carries the wheat
    let krzysztof = Rc::new(Employee::driver("Krzysztof", "Kraków", "ul. Floriańska", "B"));
    let marek = Rc::new(Employee::mechanic("Marek", "Kraków", "ul. Grodzka", 12));
    let ewa = Rc::new(Employee::manager("Ewa", "Kraków", "ul. Kanonicza", 100_000.0));
    let id4 = Rc::new(Vehicle::car("Volkswagen Id4", 4));
    let urbino = Rc::new(Vehicle::bus("Solaris Urbino", 40));

    let mut krakow = Branch::new("Kraków", "Kraków", "ul. Wawelska");
    krakow.add_employee(Rc::clone(&krzysztof));
    krakow.add_employee(Rc::clone(&marek));
    krakow.add_employee(Rc::clone(&ewa));
    krakow.add_vehicle(Rc::clone(&id4));
    krakow.add_vehicle(Rc::clone(&urbino));

    let mut company = LogisticsCompany::new("Transmax");
    company.add_branch(krakow);
    company.add_branch(warszawa);

    let mut wheat = Cargo::new("Pszenica", 90.0, "Olsztyn", "Spacerowa");
    wheat.assign_vehicle(Rc::clone(&urbino), Rc::clone(&krzysztof));
    company.add_cargo(wheat);

    (company, urbino, mikolaj)
}

/// Writes the demo printout: the loading message, the company report,
/// then a drive and a service line for every vehicle of every branch.
///
/// The Warszawa mechanic services all of them, Kraków's included; the
/// roster holds the same instance.
fn write_demo<W: Write>(
    company: &LogisticsCompany,
    loaded_bus: &Vehicle,
    mechanic: &Employee,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", loaded_bus.load_cargo("Pszenica"))?;
    write!(out, "{company}")?;
    for branch in company.branches() {
        for vehicle in branch.vehicles() {
            writeln!(out, "{}", vehicle.drive())?;
            writeln!(out, "{}", vehicle.service(mechanic))?;
        }
    }
    Ok(())
}
