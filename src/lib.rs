//! Logistics fleet domain models.
//!
//! Provides the object model of a logistics company: branches with
//! employee rosters and vehicle fleets, cargo shipments with optional
//! vehicle/driver assignments, and text reporting over all of it.
//! This crate defines the domain language only — routing, scheduling,
//! and optimization live in other layers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `LogisticsCompany`, `Branch`,
//!   `Employee`, `Vehicle`, `Cargo`, `Address`
//!
//! # Ownership
//!
//! `Employee` and `Vehicle` instances are shared by `Rc` handle, so the
//! same person or vehicle can appear on a branch roster and in a cargo
//! assignment without copies. `Branch` and `Cargo` are owned by value
//! inside the company and mutated only through the company's views.
//! Everything is single-threaded; shared instances are never mutated.
//!
//! # References
//!
//! - Evans (2003), "Domain-Driven Design: Tackling Complexity in the
//!   Heart of Software"
//! - Fowler (2002), "Patterns of Enterprise Application Architecture"

pub mod models;
