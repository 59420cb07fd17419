//! Directed city-to-city distance lookup.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{FleetError, Result};

/// Value returned by [`DistanceMap::distance`] for a pair with no entry.
pub const UNKNOWN_DISTANCE: i64 = -1;

/// Stores distances between named cities as a map of origin to destination
/// to distance.
///
/// Distances are directed: `A → B` and `B → A` are separate entries and may
/// differ. [`add_distance`](DistanceMap::add_distance) fills both directions
/// at once, symmetrically unless a reverse distance is supplied.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::DistanceMap;
///
/// let mut m = DistanceMap::new();
/// m.add_distance("Toronto", "Hamilton", 9, Some(10)).unwrap();
/// assert_eq!(m.distance("Toronto", "Hamilton"), 9);
/// assert_eq!(m.distance("Hamilton", "Toronto"), 10);
/// assert_eq!(m.distance("Toronto", "Ottawa"), -1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DistanceMap {
    distances: HashMap<String, HashMap<String, u32>>,
}

impl DistanceMap {
    /// Creates an empty distance map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the distance from `city1` to `city2`, and the reverse.
    ///
    /// The reverse distance `city2 → city1` is `distance2` when given and
    /// `distance1` otherwise. Both directions overwrite whatever was stored
    /// before, including a reverse distance set by an earlier asymmetric call.
    ///
    /// # Errors
    ///
    /// [`FleetError::SameCity`] if the cities are equal and
    /// [`FleetError::InvalidDistance`] if either distance is zero. The map is
    /// left unchanged on error.
    pub fn add_distance(
        &mut self,
        city1: impl Into<String>,
        city2: impl Into<String>,
        distance1: u32,
        distance2: Option<u32>,
    ) -> Result<()> {
        let city1 = city1.into();
        let city2 = city2.into();
        if city1 == city2 {
            return Err(FleetError::SameCity(city1));
        }
        if distance1 == 0 {
            return Err(FleetError::InvalidDistance {
                from: city1,
                to: city2,
            });
        }
        if distance2 == Some(0) {
            return Err(FleetError::InvalidDistance {
                from: city2,
                to: city1,
            });
        }

        let reverse = distance2.unwrap_or(distance1);
        debug!(%city1, %city2, forward = distance1, reverse, "recording distance");

        self.set(&city1, &city2, distance1);
        self.set(&city2, &city1, reverse);
        Ok(())
    }

    fn set(&mut self, from: &str, to: &str, distance: u32) {
        self.distances
            .entry(from.to_owned())
            .or_default()
            .insert(to.to_owned(), distance);
    }

    /// Returns the distance from `city1` to `city2`, or [`UNKNOWN_DISTANCE`]
    /// (-1) when no entry exists.
    ///
    /// The result for `city1 == city2` is not meaningful; such pairs are never
    /// stored.
    pub fn distance(&self, city1: &str, city2: &str) -> i64 {
        self.get(city1, city2).map_or(UNKNOWN_DISTANCE, i64::from)
    }

    /// Returns the distance from `city1` to `city2`, if recorded.
    pub fn get(&self, city1: &str, city2: &str) -> Option<u32> {
        self.distances.get(city1)?.get(city2).copied()
    }

    /// Returns the distance from `city1` to `city2`.
    ///
    /// # Errors
    ///
    /// [`FleetError::UnknownDistance`] if the pair has no entry.
    pub fn try_distance(&self, city1: &str, city2: &str) -> Result<u32> {
        self.get(city1, city2).ok_or_else(|| FleetError::UnknownDistance {
            from: city1.to_owned(),
            to: city2.to_owned(),
        })
    }

    /// Number of directed entries stored.
    pub fn len(&self) -> usize {
        self.distances.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no distance has been recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns `true` if `city` appears as an origin or destination.
    pub fn contains_city(&self, city: &str) -> bool {
        self.distances.contains_key(city)
            || self.distances.values().any(|row| row.contains_key(city))
    }

    /// All cities known to the map, sorted by name.
    pub fn cities(&self) -> Vec<&str> {
        let mut set = BTreeSet::new();
        for (from, row) in &self.distances {
            set.insert(from.as_str());
            set.extend(row.keys().map(String::as_str));
        }
        set.into_iter().collect()
    }

    /// Returns `true` if every entry `A → B` has an equal entry `B → A`.
    pub fn is_symmetric(&self) -> bool {
        self.distances.iter().all(|(from, row)| {
            row.iter().all(|(to, &d)| self.get(to, from) == Some(d))
        })
    }

    /// Returns the candidate closest to `from`.
    ///
    /// Candidates without a recorded distance from `from` are skipped; ties go
    /// to the earliest candidate. Returns `None` if no candidate is reachable.
    pub fn nearest<'c>(&self, from: &str, candidates: &[&'c str]) -> Option<&'c str> {
        candidates
            .iter()
            .filter_map(|&c| self.get(from, c).map(|d| (c, d)))
            .min_by_key(|&(_, d)| d)
            .map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ontario() -> DistanceMap {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Hamilton", 9, None).expect("valid");
        m.add_distance("Toronto", "Ottawa", 450, Some(455)).expect("valid");
        m.add_distance("Hamilton", "Windsor", 290, None).expect("valid");
        m
    }

    #[test]
    fn test_symmetric_default() {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Hamilton", 9, None).expect("valid");
        assert_eq!(m.distance("Toronto", "Hamilton"), 9);
        assert_eq!(m.distance("Hamilton", "Toronto"), 9);
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_asymmetric() {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Hamilton", 9, Some(10)).expect("valid");
        assert_eq!(m.distance("Toronto", "Hamilton"), 9);
        assert_eq!(m.distance("Hamilton", "Toronto"), 10);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn test_last_write_wins_both_directions() {
        let mut m = DistanceMap::new();
        m.add_distance("Toronto", "Hamilton", 9, Some(10)).expect("valid");
        m.add_distance("Hamilton", "Toronto", 10, None).expect("valid");
        assert_eq!(m.distance("Toronto", "Hamilton"), 10);
        assert_eq!(m.distance("Hamilton", "Toronto"), 10);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_unknown_pair() {
        let m = ontario();
        assert_eq!(m.distance("Toronto", "Windsor"), UNKNOWN_DISTANCE);
        assert_eq!(m.distance("Montreal", "Toronto"), UNKNOWN_DISTANCE);
        assert_eq!(m.get("Toronto", "Windsor"), None);
        assert_eq!(
            m.try_distance("Toronto", "Windsor"),
            Err(FleetError::UnknownDistance {
                from: "Toronto".into(),
                to: "Windsor".into(),
            })
        );
        assert_eq!(m.try_distance("Ottawa", "Toronto"), Ok(455));
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut m = DistanceMap::new();
        assert_eq!(
            m.add_distance("Toronto", "Toronto", 5, None),
            Err(FleetError::SameCity("Toronto".into()))
        );
        assert!(matches!(
            m.add_distance("Toronto", "Hamilton", 0, None),
            Err(FleetError::InvalidDistance { .. })
        ));
        assert_eq!(
            m.add_distance("Toronto", "Hamilton", 9, Some(0)),
            Err(FleetError::InvalidDistance {
                from: "Hamilton".into(),
                to: "Toronto".into(),
            })
        );
        assert!(m.is_empty());
    }

    #[test]
    fn test_cities_and_contains() {
        let m = ontario();
        assert_eq!(m.cities(), vec!["Hamilton", "Ottawa", "Toronto", "Windsor"]);
        assert!(m.contains_city("Windsor"));
        assert!(!m.contains_city("Montreal"));
    }

    #[test]
    fn test_nearest() {
        let m = ontario();
        assert_eq!(m.nearest("Toronto", &["Ottawa", "Hamilton"]), Some("Hamilton"));
        assert_eq!(m.nearest("Toronto", &["Windsor", "Ottawa"]), Some("Ottawa"));
        assert_eq!(m.nearest("Toronto", &["Windsor"]), None);
        assert_eq!(m.nearest("Toronto", &[]), None);
    }

    proptest! {
        #[test]
        fn prop_symmetric_default(a in "[a-z]{1,8}", b in "[A-Z]{1,8}", d in 1u32..10_000) {
            let mut m = DistanceMap::new();
            m.add_distance(a.clone(), b.clone(), d, None).unwrap();
            prop_assert_eq!(m.distance(&a, &b), i64::from(d));
            prop_assert_eq!(m.distance(&b, &a), i64::from(d));
        }

        #[test]
        fn prop_explicit_reverse(
            a in "[a-z]{1,8}",
            b in "[A-Z]{1,8}",
            d1 in 1u32..10_000,
            d2 in 1u32..10_000,
        ) {
            let mut m = DistanceMap::new();
            m.add_distance(a.clone(), b.clone(), d1, Some(d2)).unwrap();
            prop_assert_eq!(m.distance(&a, &b), i64::from(d1));
            prop_assert_eq!(m.distance(&b, &a), i64::from(d2));
            prop_assert_eq!(m.distance(&a, "unrecorded"), UNKNOWN_DISTANCE);
        }
    }
}
