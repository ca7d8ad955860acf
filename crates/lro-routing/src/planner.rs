//! Greedy multi-stop route planner.
//!
//! # Algorithm
//!
//! ```text
//! current = origin, remaining = stops
//! while remaining is not empty:
//!   ① Legs     — shortest path from current to every remaining stop
//!                (on Rayon with the `parallel` feature).
//!   ② Nearest  — the reachable stop with the lowest leg weight; ties go
//!                to the stop whose name sorts first.
//!   ③ Extend   — append the leg (minus its first location), move to the
//!                stop, drop it from remaining.
//!   If no remaining stop is reachable, stop and report the rest as stranded.
//! ```
//!
//! This is the nearest-neighbour heuristic: it issues O(S²) shortest-path
//! queries for S stops and is not globally optimal.

use std::collections::BTreeSet;

use log::{debug, trace, warn};

use lro_core::{LocationId, PlannerConfig, WeightMetric};
use lro_network::Network;

use crate::{DijkstraRouter, Path, Router, RoutingError, RoutingResult};

// ── Plan ──────────────────────────────────────────────────────────────────────

/// Outcome of a multi-stop planning request.
///
/// A plan is *partial* when some stops could not be reached from where the
/// planner stood; [`is_complete`](Self::is_complete) tells the two apart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    path:     Path,
    visited:  Vec<LocationId>,
    stranded: Vec<LocationId>,
}

impl Plan {
    /// The full route, starting at the origin.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    /// Summed weight of the optimised metric along the route.
    pub fn weight(&self) -> f64 {
        self.path.weight()
    }

    /// Stops in the order they were reached.
    pub fn visited(&self) -> &[LocationId] {
        &self.visited
    }

    /// Stops left unvisited because none of them was reachable, in name order.
    pub fn stranded(&self) -> &[LocationId] {
        &self.stranded
    }

    /// `true` if every requested stop was visited.
    pub fn is_complete(&self) -> bool {
        self.stranded.is_empty()
    }
}

// ── MultiStopPlanner ──────────────────────────────────────────────────────────

/// Chains shortest paths from a [`Router`] into one route over many stops.
///
/// # Example
///
/// ```
/// use lro_core::{PlannerConfig, WeightMetric};
/// use lro_routing::MultiStopPlanner;
///
/// let net = lro_network::sample_network().unwrap();
/// let plan = MultiStopPlanner::with_config(PlannerConfig::default())
///     .plan(&net, "Warehouse", ["City_B", "City_E"], WeightMetric::Distance)
///     .unwrap();
/// assert!(plan.is_complete());
/// assert_eq!(plan.visited(), ["City_B", "City_E"]);
/// ```
pub struct MultiStopPlanner<R: Router = DijkstraRouter> {
    router: R,
    config: PlannerConfig,
}

impl<R: Router> MultiStopPlanner<R> {
    pub fn new(router: R, config: PlannerConfig) -> Self {
        Self { router, config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Plan with the configured default metric.
    pub fn plan_default<I, S>(&self, network: &Network, origin: &str, stops: I) -> RoutingResult<Plan>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.plan(network, origin, stops, self.config.metric)
    }

    /// Build a route from `origin` through every stop in `stops`.
    ///
    /// Duplicate stops are visited once.  With an empty stop set the result
    /// is the trivial path `[origin]` of weight 0.  Unreachable stops do not
    /// fail the request: they end up in [`Plan::stranded`].
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownLocation`] if the origin or any stop is not in
    /// the network.
    pub fn plan<I, S>(
        &self,
        network: &Network,
        origin:  &str,
        stops:   I,
        metric:  WeightMetric,
    ) -> RoutingResult<Plan>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origin = resolve(network, origin)?;

        let mut remaining = BTreeSet::new();
        for stop in stops {
            let stop = resolve(network, stop.as_ref())?;
            if self.config.exclude_origin && stop == origin {
                continue;
            }
            remaining.insert(stop);
        }
        debug!("planning from {origin} over {} stop(s) by {metric}", remaining.len());

        let mut path = Path::trivial(origin, metric);
        let mut visited = Vec::with_capacity(remaining.len());

        while !remaining.is_empty() {
            let legs = self.candidate_legs(network, path.end(), &remaining, metric);
            let Some((stop, leg)) = nearest(legs)? else {
                warn!(
                    "{} stop(s) unreachable from {}; returning partial route",
                    remaining.len(),
                    path.end()
                );
                break;
            };

            debug!("next stop {stop} at {:.2} via {} route(s)", leg.weight(), leg.edge_count());
            remaining.remove(&stop);
            path.append(leg);
            visited.push(stop);
        }

        Ok(Plan {
            path,
            visited,
            stranded: remaining.into_iter().collect(),
        })
    }

    /// Shortest path from `current` to each remaining stop, in stop order.
    fn candidate_legs(
        &self,
        network:   &Network,
        current:   &LocationId,
        remaining: &BTreeSet<LocationId>,
        metric:    WeightMetric,
    ) -> Vec<(LocationId, RoutingResult<Path>)> {
        #[cfg(feature = "parallel")]
        return self.parallel_legs(network, current, remaining, metric);

        #[cfg(not(feature = "parallel"))]
        return self.sequential_legs(network, current, remaining, metric);
    }

    #[cfg(any(not(feature = "parallel"), test))]
    pub(crate) fn sequential_legs(
        &self,
        network:   &Network,
        current:   &LocationId,
        remaining: &BTreeSet<LocationId>,
        metric:    WeightMetric,
    ) -> Vec<(LocationId, RoutingResult<Path>)> {
        remaining
            .iter()
            .map(|stop| {
                let leg = self.router.shortest_path(network, current.as_str(), stop.as_str(), metric);
                (stop.clone(), leg)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn parallel_legs(
        &self,
        network:   &Network,
        current:   &LocationId,
        remaining: &BTreeSet<LocationId>,
        metric:    WeightMetric,
    ) -> Vec<(LocationId, RoutingResult<Path>)> {
        use rayon::prelude::*;

        // Indexed collect keeps stop order, so the pick below is unchanged.
        let stops: Vec<&LocationId> = remaining.iter().collect();
        stops
            .par_iter()
            .map(|&stop| {
                let leg = self.router.shortest_path(network, current.as_str(), stop.as_str(), metric);
                (stop.clone(), leg)
            })
            .collect()
    }
}

impl MultiStopPlanner<DijkstraRouter> {
    /// Planner over the default [`DijkstraRouter`].
    pub fn with_config(config: PlannerConfig) -> Self {
        Self::new(DijkstraRouter, config)
    }
}

impl Default for MultiStopPlanner<DijkstraRouter> {
    fn default() -> Self {
        Self::with_config(PlannerConfig::default())
    }
}

/// Pick the reachable candidate with the lowest leg weight.
///
/// `legs` arrive in stop-name order and `min_by` keeps the first of equal
/// minima, so ties resolve lexicographically.  `NotReachable` legs are
/// skipped; any other error aborts the plan.
fn nearest(legs: Vec<(LocationId, RoutingResult<Path>)>) -> RoutingResult<Option<(LocationId, Path)>> {
    let mut reachable = Vec::with_capacity(legs.len());
    for (stop, leg) in legs {
        match leg {
            Ok(leg) => reachable.push((stop, leg)),
            Err(RoutingError::NotReachable { .. }) => trace!("stop {stop} not reachable"),
            Err(e) => return Err(e),
        }
    }
    Ok(reachable
        .into_iter()
        .min_by(|(_, a), (_, b)| a.weight().total_cmp(&b.weight())))
}

fn resolve(network: &Network, name: &str) -> RoutingResult<LocationId> {
    network
        .location_id(name)
        .cloned()
        .ok_or_else(|| RoutingError::UnknownLocation(LocationId::new(name)))
}
