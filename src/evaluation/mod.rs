//! Route distance evaluation and fleet reporting.
//!
//! - [`TravelEvaluator`] — splits truck routes into legs and sums their distances
//! - [`TravelOptions`] — leg walk and unknown-leg policy
//! - [`FleetStats`] — utilization and distance report for a whole fleet

mod summary;
mod travel;

pub use summary::FleetStats;
pub use travel::{LegWalk, TravelEvaluator, TravelOptions, UnknownLeg};
