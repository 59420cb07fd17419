//! Route walker that turns a truck route into legs and distances.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::distance::{DistanceMap, UNKNOWN_DISTANCE};
use crate::error::{FleetError, Result};

/// How a route is split into legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegWalk {
    /// `route[0] → route[1] → … → route[n-1]`, then back to `route[0]`.
    #[default]
    Sequential,
    /// Legacy walk whose first leg is `route[n-1] → route[0]` instead of
    /// `route[0] → route[1]`; the remaining legs and the closing leg match
    /// [`Sequential`](LegWalk::Sequential).
    WrapAround,
}

/// What to do when a leg has no entry in the distance map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLeg {
    /// Fail with [`FleetError::UnknownDistance`].
    #[default]
    Fail,
    /// Count the leg as [`UNKNOWN_DISTANCE`] (-1) and carry on.
    Sentinel,
}

/// Options controlling route distance computation.
///
/// # Examples
///
/// ```
/// use u_fleet::evaluation::{LegWalk, TravelOptions, UnknownLeg};
///
/// let opts = TravelOptions::default();
/// assert_eq!(opts.walk(), LegWalk::Sequential);
/// assert_eq!(opts.on_unknown(), UnknownLeg::Fail);
///
/// let legacy = TravelOptions::legacy();
/// assert_eq!(legacy.walk(), LegWalk::WrapAround);
/// assert_eq!(legacy.on_unknown(), UnknownLeg::Sentinel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelOptions {
    walk: LegWalk,
    on_unknown: UnknownLeg,
}

impl TravelOptions {
    /// Options matching the legacy report figures: wrap-around walk and -1 for
    /// every unknown leg.
    pub fn legacy() -> Self {
        Self {
            walk: LegWalk::WrapAround,
            on_unknown: UnknownLeg::Sentinel,
        }
    }

    /// Sets the leg walk.
    pub fn with_walk(mut self, walk: LegWalk) -> Self {
        self.walk = walk;
        self
    }

    /// Sets the unknown-leg policy.
    pub fn with_unknown_leg(mut self, on_unknown: UnknownLeg) -> Self {
        self.on_unknown = on_unknown;
        self
    }

    /// Leg walk in use.
    pub fn walk(&self) -> LegWalk {
        self.walk
    }

    /// Unknown-leg policy in use.
    pub fn on_unknown(&self) -> UnknownLeg {
        self.on_unknown
    }
}

/// Computes route distances from a [`DistanceMap`].
///
/// A route is a list of cities starting at the depot. Its distance is the sum
/// of its legs plus the closing leg from the last city back to the depot. A
/// route holding only the depot has not travelled and has no legs.
///
/// # Examples
///
/// ```
/// use u_fleet::distance::DistanceMap;
/// use u_fleet::evaluation::TravelEvaluator;
///
/// let mut dmap = DistanceMap::new();
/// dmap.add_distance("Toronto", "Hamilton", 9, None).unwrap();
/// dmap.add_distance("Hamilton", "Windsor", 290, None).unwrap();
/// dmap.add_distance("Windsor", "Toronto", 370, None).unwrap();
///
/// let route = ["Toronto", "Hamilton", "Windsor"].map(String::from);
/// let eval = TravelEvaluator::new(&dmap);
/// assert_eq!(eval.legs(&route).len(), 3);
/// assert_eq!(eval.route_distance(&route).unwrap(), 669);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TravelEvaluator<'a> {
    distances: &'a DistanceMap,
    options: TravelOptions,
}

impl<'a> TravelEvaluator<'a> {
    /// Creates an evaluator with default options.
    pub fn new(distances: &'a DistanceMap) -> Self {
        Self::with_options(distances, TravelOptions::default())
    }

    /// Creates an evaluator with the given options.
    pub fn with_options(distances: &'a DistanceMap, options: TravelOptions) -> Self {
        Self { distances, options }
    }

    /// Options in use.
    pub fn options(&self) -> TravelOptions {
        self.options
    }

    /// Returns `true` if the route goes beyond the depot.
    pub fn is_travelled(&self, route: &[String]) -> bool {
        route.len() > 1
    }

    /// Splits a route into directed legs, closing leg last.
    pub fn legs<'r>(&self, route: &'r [String]) -> Vec<(&'r str, &'r str)> {
        let n = route.len();
        if n <= 1 {
            return Vec::new();
        }

        let mut legs = Vec::with_capacity(n);
        match self.options.walk {
            LegWalk::Sequential => {
                legs.extend(route.windows(2).map(|w| (w[0].as_str(), w[1].as_str())));
            }
            LegWalk::WrapAround => {
                for i in 0..n - 1 {
                    let from = if i == 0 { &route[n - 1] } else { &route[i - 1] };
                    legs.push((from.as_str(), route[i].as_str()));
                }
            }
        }
        legs.push((route[n - 1].as_str(), route[0].as_str()));
        legs
    }

    /// Distance of one directed leg.
    ///
    /// Under [`LegWalk::Sequential`] a leg that stays in the same city costs
    /// nothing.
    pub fn leg_distance(&self, from: &str, to: &str) -> Result<i64> {
        if from == to && self.options.walk == LegWalk::Sequential {
            return Ok(0);
        }
        match self.distances.get(from, to) {
            Some(d) => Ok(i64::from(d)),
            None => match self.options.on_unknown {
                UnknownLeg::Fail => Err(FleetError::UnknownDistance {
                    from: from.to_owned(),
                    to: to.to_owned(),
                }),
                UnknownLeg::Sentinel => {
                    warn!(from, to, "no distance recorded for leg, counting -1");
                    Ok(UNKNOWN_DISTANCE)
                }
            },
        }
    }

    /// Total distance of a route including the return to the depot.
    ///
    /// Zero for a route that has not travelled.
    pub fn route_distance(&self, route: &[String]) -> Result<i64> {
        let mut total = 0;
        for (from, to) in self.legs(route) {
            let d = self.leg_distance(from, to)?;
            trace!(from, to, distance = d, "leg");
            total += d;
        }
        Ok(total)
    }
}
