//! Fleet-wide report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TravelEvaluator;
use crate::error::Result;
use crate::models::{Fleet, Truck};

/// Utilization and distance figures for a fleet.
///
/// Averages are `None` when there is nothing to average over, rather than an
/// error, so a report can always be produced for a valid distance map.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::DistanceMap;
/// use u_fleet::models::{Fleet, Parcel, Truck};
///
/// let mut dmap = DistanceMap::new();
/// dmap.add_distance("Toronto", "Hamilton", 9, None).unwrap();
///
/// let mut fleet = Fleet::new();
/// let mut t = Truck::new(1, 10, "Toronto").unwrap();
/// t.pack(Parcel::new(1, 5, "Toronto", "Hamilton").unwrap());
/// fleet.add_truck(t);
/// fleet.add_truck(Truck::new(2, 10, "Toronto").unwrap());
///
/// let stats = fleet.stats(&dmap).unwrap();
/// assert_eq!(stats.num_trucks, 2);
/// assert_eq!(stats.unused_trucks, 1);
/// assert_eq!(stats.unused_space, 5);
/// assert_eq!(stats.average_fullness, Some(50.0));
/// assert_eq!(stats.total_distance, 18);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStats {
    /// Number of trucks in the fleet.
    pub num_trucks: usize,
    /// Trucks carrying no parcels.
    pub unused_trucks: usize,
    /// Unused capacity summed over non-empty trucks.
    pub unused_space: u64,
    /// Mean fullness of non-empty trucks, if any.
    pub average_fullness: Option<f64>,
    /// Distance driven by the whole fleet.
    pub total_distance: i64,
    /// Mean distance over trucks that left the depot, if any.
    pub average_distance: Option<f64>,
}

impl FleetStats {
    /// Gathers the report for `fleet`, measuring routes with `evaluator`.
    ///
    /// Fails only if the evaluator rejects a leg.
    pub fn collect(fleet: &Fleet, evaluator: &TravelEvaluator<'_>) -> Result<Self> {
        let loaded = fleet.num_nonempty_trucks();
        let average_fullness = if loaded > 0 {
            Some(fleet.average_fullness()?)
        } else {
            None
        };

        let travelled = fleet.trucks().iter().any(Truck::has_travelled);
        let average_distance = if travelled {
            Some(fleet.average_distance_travelled_with(evaluator)?)
        } else {
            None
        };

        let stats = Self {
            num_trucks: fleet.num_trucks(),
            unused_trucks: fleet.num_trucks() - loaded,
            unused_space: fleet.total_unused_space(),
            average_fullness,
            total_distance: fleet.total_distance_travelled_with(evaluator)?,
            average_distance,
        };
        debug!(?stats, "fleet stats collected");
        Ok(stats)
    }
}
