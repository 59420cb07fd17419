//! # u-fleet
//!
//! Parcel-to-truck allocation model: a directed distance map between named
//! cities, trucks that accept parcels up to their capacity, and fleet-wide
//! utilization and distance statistics.
//!
//! Choosing which truck receives which parcel is left to the caller; this
//! crate enforces the capacity invariant and reports on the outcome.
//!
//! ## Modules
//!
//! - [`distance`] — Directed city-to-city distance map
//! - [`models`] — Domain model types (Parcel, Truck, Fleet)
//! - [`evaluation`] — Route distance evaluation and fleet reports
//! - [`error`] — Error type and crate `Result`

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;

pub use error::{FleetError, Result};
