//! Shared routing service.
//!
//! [`RoutingService`] is the surface a presentation layer talks to: network
//! edits, enumeration for selection widgets, and route queries.  The network
//! sits behind a single `Mutex`; every call holds it for its full duration,
//! so a query never observes a half-applied edit and an edit never lands in
//! the middle of a search.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lro_core::{LocationId, PlannerConfig, Position, RouteTotals, RouteWeights, WeightMetric};
use lro_network::{Network, NetworkResult};

use crate::{DijkstraRouter, MultiStopPlanner, Path, Plan, Router, RoutingResult, summarize};

/// A planned route together with its totals over every metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RouteReport {
    pub plan:   Plan,
    pub totals: RouteTotals,
}

/// A [`Network`] and a [`MultiStopPlanner`] that can be shared between
/// threads.
///
/// # Example
///
/// ```
/// use lro_core::{PlannerConfig, Position};
/// use lro_routing::RoutingService;
///
/// let service = RoutingService::with_config(lro_network::sample_network().unwrap(), PlannerConfig::default());
/// service.add_location("City_F", Position::new(0.95, 0.2)).unwrap();
/// service.add_route("City_E", "City_F", 9.0, 11.0, 5.0).unwrap();
///
/// let report = service.plan_route("Warehouse", ["City_F"], None).unwrap();
/// assert_eq!(report.plan.path().end(), "City_F");
/// assert_eq!(report.totals.distance, 62.0);
/// ```
pub struct RoutingService<R: Router = DijkstraRouter> {
    network: Mutex<Network>,
    planner: MultiStopPlanner<R>,
}

impl<R: Router> RoutingService<R> {
    pub fn new(network: Network, planner: MultiStopPlanner<R>) -> Self {
        Self { network: Mutex::new(network), planner }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    pub fn add_location(&self, name: &str, position: Position) -> NetworkResult<()> {
        self.lock().add_location(name, position)
    }

    pub fn remove_location(&self, name: &str) -> NetworkResult<usize> {
        self.lock().remove_location(name)
    }

    pub fn add_route(
        &self,
        a:        &str,
        b:        &str,
        distance: f64,
        time:     f64,
        cost:     f64,
    ) -> NetworkResult<Option<RouteWeights>> {
        self.lock().add_route(a, b, distance, time, cost)
    }

    // ── Enumeration ───────────────────────────────────────────────────────

    /// All location ids, in name order.
    pub fn locations(&self) -> Vec<LocationId> {
        self.lock().locations().cloned().collect()
    }

    /// Run `f` against the network under the lock, e.g. to render it.
    pub fn with_network<T>(&self, f: impl FnOnce(&Network) -> T) -> T {
        f(&self.lock())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn shortest_path(&self, from: &str, to: &str, metric: WeightMetric) -> RoutingResult<Path> {
        let network = self.lock();
        self.planner.router().shortest_path(&network, from, to, metric)
    }

    /// Plan a multi-stop route and total it over every metric.
    ///
    /// `metric: None` uses the planner's configured default.
    pub fn plan_route<I, S>(&self, origin: &str, stops: I, metric: Option<WeightMetric>) -> RoutingResult<RouteReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let network = self.lock();
        let metric = metric.unwrap_or(self.planner.config().metric);
        let plan = self.planner.plan(&network, origin, stops, metric)?;
        let totals = summarize(&network, plan.path().locations())?;
        Ok(RouteReport { plan, totals })
    }

    /// Totals along an externally supplied sequence of locations.
    pub fn summarize<S: AsRef<str>>(&self, locations: &[S]) -> RoutingResult<RouteTotals> {
        summarize(&self.lock(), locations)
    }

    /// Give the network back, ending the service.
    pub fn into_network(self) -> Network {
        self.network.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Network mutations are all-or-nothing, so a panic elsewhere while the
    /// lock was held cannot have left it inconsistent; recover the guard.
    fn lock(&self) -> MutexGuard<'_, Network> {
        self.network.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoutingService<DijkstraRouter> {
    /// Service over the default [`DijkstraRouter`].
    pub fn with_config(network: Network, config: PlannerConfig) -> Self {
        Self::new(network, MultiStopPlanner::with_config(config))
    }
}
