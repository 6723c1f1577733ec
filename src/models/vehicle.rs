//! Vehicle model.
//!
//! A vehicle is a model name with a seat-or-load capacity and exactly
//! one kind out of a closed set: car, truck, or bus. Driving and
//! cargo-loading messages are flavored per kind; servicing is the same
//! for every kind.
//!
//! Capacity is a raw count and is not validated. Negative values are
//! accepted and carried through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Employee;

/// Kind of vehicle.
///
/// The set is closed: every vehicle is exactly one of these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
}

impl VehicleKind {
    fn noun(&self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Truck => "truck",
            VehicleKind::Bus => "bus",
        }
    }
}

/// A fleet vehicle.
///
/// Vehicles are shared between holders by `Rc` handle: the same
/// instance can sit in a branch fleet and be assigned to a cargo
/// without being copied.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Vehicle;
///
/// let bus = Vehicle::bus("Solaris Urbino", 40);
/// assert_eq!(bus.drive(), "The bus is carrying passengers");
/// assert_eq!(bus.to_string(), "model=Solaris Urbino, capacity=40");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    model: String,
    capacity: i32,
    kind: VehicleKind,
}

impl Vehicle {
    /// Creates a vehicle with an explicit kind.
    pub fn new(model: impl Into<String>, capacity: i32, kind: VehicleKind) -> Self {
        Self {
            model: model.into(),
            capacity,
            kind,
        }
    }

    /// Creates a car.
    pub fn car(model: impl Into<String>, capacity: i32) -> Self {
        Self::new(model, capacity, VehicleKind::Car)
    }

    /// Creates a truck.
    pub fn truck(model: impl Into<String>, capacity: i32) -> Self {
        Self::new(model, capacity, VehicleKind::Truck)
    }

    /// Creates a bus.
    pub fn bus(model: impl Into<String>, capacity: i32) -> Self {
        Self::new(model, capacity, VehicleKind::Bus)
    }

    /// Model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Seat or load capacity.
    #[inline]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Kind of vehicle.
    #[inline]
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Driving message, flavored per kind.
    ///
    /// Cars and trucks just drive; the bus carries passengers.
    pub fn drive(&self) -> &'static str {
        match self.kind {
            VehicleKind::Car => "The car is driving",
            VehicleKind::Truck => "The truck is driving",
            VehicleKind::Bus => "The bus is carrying passengers",
        }
    }

    /// Loading message referencing the cargo description and this
    /// vehicle's model, flavored per kind.
    pub fn load_cargo(&self, description: &str) -> String {
        format!(
            "{} loaded into the {} {}",
            description,
            self.kind.noun(),
            self.model
        )
    }

    /// Servicing message naming the mechanic and this vehicle's model.
    ///
    /// Not flavored per kind: servicing reads the same for every
    /// vehicle. Any employee can do the work; the roster carries no
    /// qualification check.
    pub fn service(&self, mechanic: &Employee) -> String {
        format!("{} is servicing {}", mechanic.name(), self.model)
    }
}

impl fmt::Display for Vehicle {
    /// Renders `model=<model>, capacity=<n>`. The kind is not part of
    /// the text form; all three kinds render identically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model={}, capacity={}", self.model, self.capacity)
    }
}
