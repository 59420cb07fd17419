//! Truck type with a capacity-bound cargo compartment.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::{round_to, Parcel};
use crate::error::{FleetError, Result};

/// A delivery truck.
///
/// A truck starts at its depot with no parcels. Parcels are added only
/// through [`pack`](Truck::pack), which never lets the packed volume exceed
/// the capacity. Each packed parcel appends its destination to the route.
///
/// # Examples
///
/// ```
/// use u_fleet::models::{Parcel, Truck};
///
/// let mut t = Truck::new(1423, 10, "Toronto").unwrap();
/// assert!(t.pack(Parcel::new(1, 5, "Toronto", "Hamilton").unwrap()));
/// assert!(!t.pack(Parcel::new(2, 6, "Toronto", "Ottawa").unwrap()));
/// assert_eq!(t.stored_vol(), 5);
/// assert_eq!(t.fullness(), 50.0);
/// assert_eq!(t.route(), ["Toronto", "Hamilton"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truck {
    id: usize,
    capacity: u32,
    route: Vec<String>,
    parcels: Vec<Parcel>,
}

impl Truck {
    /// Creates an empty truck parked at `depot`.
    ///
    /// Returns [`FleetError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(id: usize, capacity: u32, depot: impl Into<String>) -> Result<Self> {
        if capacity == 0 {
            return Err(FleetError::InvalidCapacity { id });
        }
        Ok(Self {
            id,
            capacity,
            route: vec![depot.into()],
            parcels: Vec::new(),
        })
    }

    /// Truck ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Volume of the cargo compartment.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// City the route starts and ends at.
    pub fn depot(&self) -> &str {
        &self.route[0]
    }

    /// Cities in visiting order, starting with the depot.
    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Packed parcels in packing order.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// IDs of the packed parcels in packing order.
    pub fn parcel_ids(&self) -> Vec<usize> {
        self.parcels.iter().map(Parcel::id).collect()
    }

    /// Total volume of the packed parcels.
    pub fn stored_vol(&self) -> u32 {
        self.parcels.iter().map(Parcel::volume).sum()
    }

    /// Capacity not taken up by packed parcels.
    pub fn unused_space(&self) -> u32 {
        self.capacity - self.stored_vol()
    }

    /// Packs `parcel` if it fits in the remaining space.
    ///
    /// On success the parcel is appended and its destination is added to the
    /// route. Returns `false` and leaves the truck unchanged otherwise.
    pub fn pack(&mut self, parcel: Parcel) -> bool {
        let stored = self.stored_vol();
        // u64 so an oversized parcel cannot wrap the sum
        if u64::from(parcel.volume()) + u64::from(stored) > u64::from(self.capacity) {
            debug!(
                truck = self.id,
                parcel = parcel.id(),
                volume = parcel.volume(),
                stored,
                capacity = self.capacity,
                "parcel does not fit"
            );
            return false;
        }

        debug!(
            truck = self.id,
            parcel = parcel.id(),
            destination = parcel.destination(),
            "parcel packed"
        );
        self.route.push(parcel.destination().to_owned());
        self.parcels.push(parcel);
        true
    }

    /// Percentage of the capacity taken up, rounded to one decimal place.
    pub fn fullness(&self) -> f64 {
        round_to(100.0 * f64::from(self.stored_vol()) / f64::from(self.capacity), 1)
    }

    /// Returns `true` if no parcel has been packed.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Returns `true` if the route goes beyond the depot.
    pub fn has_travelled(&self) -> bool {
        self.route.len() > 1
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Truck {} [{}/{}, {:.1}%]: {}",
            self.id,
            self.stored_vol(),
            self.capacity,
            self.fullness(),
            self.route.join(" -> ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parcel(id: usize, volume: u32, dest: &str) -> Parcel {
        Parcel::new(id, volume, "Toronto", dest).expect("valid parcel")
    }

    #[test]
    fn test_truck_new() {
        let t = Truck::new(1423, 1000, "Toronto").expect("valid");
        assert_eq!(t.id(), 1423);
        assert_eq!(t.capacity(), 1000);
        assert_eq!(t.depot(), "Toronto");
        assert_eq!(t.route(), ["Toronto"]);
        assert!(t.is_empty());
        assert!(!t.has_travelled());
        assert_eq!(t.stored_vol(), 0);
        assert_eq!(t.fullness(), 0.0);
    }

    #[test]
    fn test_truck_zero_capacity() {
        assert_eq!(
            Truck::new(9, 0, "Toronto"),
            Err(FleetError::InvalidCapacity { id: 9 })
        );
    }

    #[test]
    fn test_pack_rejects_overflow() {
        let mut t = Truck::new(1, 10, "Toronto").expect("valid");
        assert!(t.pack(parcel(1, 5, "Hamilton")));
        let before = t.clone();
        assert!(!t.pack(parcel(2, 6, "Ottawa")));
        assert_eq!(t, before);
        assert_eq!(t.stored_vol(), 5);
    }

    #[test]
    fn test_pack_exact_fit() {
        let mut t = Truck::new(1, 10, "Toronto").expect("valid");
        assert!(t.pack(parcel(1, 5, "Hamilton")));
        assert!(t.pack(parcel(2, 4, "Montreal")));
        assert_eq!(t.fullness(), 90.0);
        assert!(t.pack(parcel(3, 1, "Windsor")));
        assert_eq!(t.fullness(), 100.0);
        assert_eq!(t.unused_space(), 0);
        assert!(!t.pack(parcel(4, 1, "Ottawa")));
    }

    #[test]
    fn test_route_and_order() {
        let mut t = Truck::new(1, 20, "Toronto").expect("valid");
        t.pack(parcel(27, 5, "Hamilton"));
        t.pack(parcel(12, 5, "Hamilton"));
        t.pack(parcel(3, 2, "Windsor"));
        assert_eq!(t.parcel_ids(), vec![27, 12, 3]);
        assert_eq!(t.route(), ["Toronto", "Hamilton", "Hamilton", "Windsor"]);
        assert!(t.has_travelled());
    }

    #[test]
    fn test_fullness_rounding() {
        let mut t = Truck::new(1, 3, "Toronto").expect("valid");
        t.pack(parcel(1, 1, "Hamilton"));
        assert_eq!(t.fullness(), 33.3);
        t.pack(parcel(2, 1, "Hamilton"));
        assert_eq!(t.fullness(), 66.7);
    }

    #[test]
    fn test_display() {
        let mut t = Truck::new(5912, 20, "Toronto").expect("valid");
        t.pack(parcel(3, 2, "Windsor"));
        assert_eq!(t.to_string(), "Truck 5912 [2/20, 10.0%]: Toronto -> Windsor");
    }

    proptest! {
        #[test]
        fn prop_capacity_never_exceeded(
            capacity in 1u32..200,
            volumes in proptest::collection::vec(1u32..80, 0..30),
        ) {
            let mut t = Truck::new(0, capacity, "Depot").unwrap();
            for (i, v) in volumes.into_iter().enumerate() {
                let before = t.stored_vol();
                let fits = before + v <= capacity;
                let packed = t.pack(Parcel::new(i, v, "Depot", "Somewhere").unwrap());
                prop_assert_eq!(packed, fits);
                prop_assert_eq!(t.stored_vol(), if fits { before + v } else { before });
                prop_assert!(t.stored_vol() <= t.capacity());
                prop_assert_eq!(t.route().len(), t.parcels().len() + 1);
            }
        }

        #[test]
        fn prop_fullness_matches_ratio(
            capacity in 1u32..500,
            volumes in proptest::collection::vec(1u32..100, 0..10),
        ) {
            let mut t = Truck::new(0, capacity, "Depot").unwrap();
            for (i, v) in volumes.into_iter().enumerate() {
                t.pack(Parcel::new(i, v, "Depot", "Somewhere").unwrap());
            }
            let expected = round_to(100.0 * f64::from(t.stored_vol()) / f64::from(capacity), 1);
            prop_assert_eq!(t.fullness(), expected);
            prop_assert!(t.fullness() <= 100.0);
        }
    }
}
