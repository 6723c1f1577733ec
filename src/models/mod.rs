//! Logistics domain models.
//!
//! Provides the core data types for representing a logistics company:
//! its branches, the people and vehicles attached to them, and the
//! cargo it moves.
//!
//! # Entities
//!
//! | Type | Holds | Shared? |
//! |------|-------|---------|
//! | [`Address`] | city + street | by value |
//! | [`Employee`] | name, address, [`Role`] | `Rc` handle |
//! | [`Vehicle`] | model, capacity, [`VehicleKind`] | `Rc` handle |
//! | [`Branch`] | roster + fleet | by value in the company |
//! | [`Cargo`] | shipment + optional assignment | by value in the company |
//! | [`LogisticsCompany`] | branches + cargos | top-level aggregate |

mod address;
mod branch;
mod cargo;
mod company;
mod employee;
mod vehicle;

pub use address::Address;
pub use branch::Branch;
pub use cargo::Cargo;
pub use company::LogisticsCompany;
pub use employee::{Employee, Role};
pub use vehicle::{Vehicle, VehicleKind};
