//! Domain model types for parcel allocation.
//!
//! Provides the core entities: parcels with a volume and a destination,
//! trucks with a capacity-bound cargo compartment and a delivery route, and
//! a fleet that owns trucks and reports on their utilization.

mod fleet;
mod parcel;
mod truck;

pub use fleet::Fleet;
pub use parcel::Parcel;
pub use truck::Truck;

/// Rounds half away from zero to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
