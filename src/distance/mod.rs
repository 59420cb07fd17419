//! City distance lookup.
//!
//! Provides a directed, name-keyed distance map.

mod map;

pub use map::{DistanceMap, UNKNOWN_DISTANCE};
