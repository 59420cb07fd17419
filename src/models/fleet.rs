//! Fleet type and fleet-wide statistics.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::{round_to, Truck};
use crate::distance::DistanceMap;
use crate::error::{FleetError, Result};
use crate::evaluation::{FleetStats, TravelEvaluator};

/// A fleet of delivery trucks.
///
/// The fleet owns its trucks. Trucks are added one at a time and never
/// removed. Truck IDs are expected to be unique; this is not checked.
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
/// for (truck_id, parcel_id) in [(1423, 1), (1333, 2)] {
///     let mut t = Truck::new(truck_id, 10, "Toronto").unwrap();
///     t.pack(Parcel::new(parcel_id, 5, "Toronto", "Hamilton").unwrap());
///     fleet.add_truck(t);
/// }
///
/// assert_eq!(fleet.num_trucks(), 2);
/// assert_eq!(fleet.total_unused_space(), 10);
/// assert_eq!(fleet.total_distance_travelled(&dmap).unwrap(), 36);
/// assert_eq!(fleet.average_distance_travelled(&dmap).unwrap(), 18.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Creates a fleet with no trucks.
    pub fn new() -> Self {
        Self { trucks: Vec::new() }
    }

    /// Adds a truck to this fleet.
    pub fn add_truck(&mut self, truck: Truck) {
        self.trucks.push(truck);
    }

    /// Returns the trucks in the order they were added.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// Returns mutable references to the trucks, for packing in place.
    pub fn trucks_mut(&mut self) -> impl Iterator<Item = &mut Truck> {
        self.trucks.iter_mut()
    }

    /// Returns the first truck with the given ID.
    pub fn truck(&self, id: usize) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id() == id)
    }

    /// Returns the first truck with the given ID, mutably.
    pub fn truck_mut(&mut self, id: usize) -> Option<&mut Truck> {
        self.trucks.iter_mut().find(|t| t.id() == id)
    }

    /// Number of trucks in the fleet.
    pub fn num_trucks(&self) -> usize {
        self.trucks.len()
    }

    /// Number of trucks carrying at least one parcel.
    pub fn num_nonempty_trucks(&self) -> usize {
        self.loaded().count()
    }

    fn loaded(&self) -> impl Iterator<Item = &Truck> {
        self.trucks.iter().filter(|t| !t.is_empty())
    }

    /// Maps each truck ID to the IDs of its parcels in packing order.
    ///
    /// Every truck is present, including empty ones.
    pub fn parcel_allocations(&self) -> BTreeMap<usize, Vec<usize>> {
        self.trucks
            .iter()
            .map(|t| (t.id(), t.parcel_ids()))
            .collect()
    }

    /// Unused capacity summed over non-empty trucks.
    ///
    /// Empty trucks do not count. Zero when every truck is empty.
    pub fn total_unused_space(&self) -> u64 {
        self.loaded().map(|t| u64::from(t.unused_space())).sum()
    }

    /// Sum of [`Truck::fullness`] over non-empty trucks.
    pub fn total_fullness(&self) -> f64 {
        self.loaded().map(Truck::fullness).sum()
    }

    /// Mean fullness of the non-empty trucks, rounded to one decimal place.
    ///
    /// # Errors
    ///
    /// [`FleetError::NoNonEmptyTrucks`] if every truck is empty.
    pub fn average_fullness(&self) -> Result<f64> {
        let n = self.num_nonempty_trucks();
        if n == 0 {
            return Err(FleetError::NoNonEmptyTrucks);
        }
        Ok(round_to(self.total_fullness() / n as f64, 1))
    }

    /// Total distance driven by all trucks, including each return to the
    /// depot, using the default [`TravelOptions`](crate::evaluation::TravelOptions).
    ///
    /// Trucks that never left the depot contribute nothing.
    ///
    /// # Errors
    ///
    /// [`FleetError::UnknownDistance`] if a leg has no entry in `dmap`.
    pub fn total_distance_travelled(&self, dmap: &DistanceMap) -> Result<i64> {
        self.total_distance_travelled_with(&TravelEvaluator::new(dmap))
    }

    /// Like [`total_distance_travelled`](Self::total_distance_travelled),
    /// with an explicitly configured evaluator.
    pub fn total_distance_travelled_with(&self, evaluator: &TravelEvaluator<'_>) -> Result<i64> {
        Ok(self.route_distances(evaluator)?.into_iter().sum())
    }

    /// Mean route distance over trucks that left the depot, rounded to two
    /// decimal places.
    ///
    /// # Errors
    ///
    /// [`FleetError::NoTravelledTrucks`] if no truck left the depot, or
    /// [`FleetError::UnknownDistance`] if a leg has no entry in `dmap`.
    pub fn average_distance_travelled(&self, dmap: &DistanceMap) -> Result<f64> {
        self.average_distance_travelled_with(&TravelEvaluator::new(dmap))
    }

    /// Like [`average_distance_travelled`](Self::average_distance_travelled),
    /// with an explicitly configured evaluator.
    pub fn average_distance_travelled_with(&self, evaluator: &TravelEvaluator<'_>) -> Result<f64> {
        let distances = self.route_distances(evaluator)?;
        if distances.is_empty() {
            return Err(FleetError::NoTravelledTrucks);
        }
        let total: i64 = distances.iter().sum();
        Ok(round_to(total as f64 / distances.len() as f64, 2))
    }

    // One entry per truck that left the depot.
    fn route_distances(&self, evaluator: &TravelEvaluator<'_>) -> Result<Vec<i64>> {
        self.trucks
            .iter()
            .filter(|t| evaluator.is_travelled(t.route()))
            .map(|t| evaluator.route_distance(t.route()))
            .collect()
    }

    /// Collects the fleet report using the default travel options.
    pub fn stats(&self, dmap: &DistanceMap) -> Result<FleetStats> {
        FleetStats::collect(self, &TravelEvaluator::new(dmap))
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for truck in &self.trucks {
            writeln!(f, "{truck}")?;
        }
        Ok(())
    }
}
