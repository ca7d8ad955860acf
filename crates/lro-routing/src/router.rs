//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The planner and the service call routing via the [`Router`] trait, so
//! applications can swap in other single-pair algorithms (A* over layout
//! positions, cached distance tables) without touching the planner.  The
//! default [`DijkstraRouter`] is sufficient for delivery networks of a few
//! hundred locations.
//!
//! # Weights
//!
//! Edge weight is the route attribute selected by the query's
//! [`WeightMetric`].  All weights are validated non-negative when the route
//! is added, which is what Dijkstra needs to be exact.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use lro_core::{LocationId, WeightMetric};
use lro_network::Network;

use crate::{Path, RoutingError, RoutingResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-pair shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can evaluate candidate
/// legs on Rayon worker threads (feature `parallel`) and so a
/// [`RoutingService`](crate::RoutingService) can be shared across threads.
pub trait Router: Send + Sync {
    /// Compute the least-weight path from `from` to `to` under `metric`.
    ///
    /// `from == to` yields the trivial zero-weight path.  Returns
    /// [`RoutingError::NotReachable`] if either endpoint is missing from the
    /// network or no path connects them.
    fn shortest_path(
        &self,
        network: &Network,
        from:    &str,
        to:      &str,
        metric:  WeightMetric,
    ) -> RoutingResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the network's adjacency maps.
///
/// The frontier is keyed by accumulated weight; equal weights are served in
/// discovery order, so results are reproducible run to run.  The search stops
/// as soon as the destination is finalized.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(
        &self,
        network: &Network,
        from:    &str,
        to:      &str,
        metric:  WeightMetric,
    ) -> RoutingResult<Path> {
        dijkstra(network, from, to, metric)
    }
}

/// Shortest path with the default [`DijkstraRouter`].
///
/// ```
/// use lro_core::WeightMetric;
/// use lro_routing::shortest_path;
///
/// let net = lro_network::sample_network().unwrap();
/// let path = shortest_path(&net, "Warehouse", "City_E", WeightMetric::Distance).unwrap();
/// assert_eq!(path.weight(), 53.0);
/// assert_eq!(path.locations(), ["Warehouse", "Hub_1", "City_D", "City_E"]);
/// ```
pub fn shortest_path(network: &Network, from: &str, to: &str, metric: WeightMetric) -> RoutingResult<Path> {
    DijkstraRouter.shortest_path(network, from, to, metric)
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier entry.  Ordering is reversed so `BinaryHeap` (a max-heap) pops the
/// lowest weight first, and among equal weights the lowest sequence number.
struct Frontier<'a> {
    weight: f64,
    seq:    u64,
    node:   &'a LocationId,
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

fn dijkstra(network: &Network, from: &str, to: &str, metric: WeightMetric) -> RoutingResult<Path> {
    let not_reachable = || RoutingError::NotReachable {
        from: LocationId::new(from),
        to:   LocationId::new(to),
    };
    let (Some(start), Some(goal)) = (network.location_id(from), network.location_id(to)) else {
        return Err(not_reachable());
    };

    if start == goal {
        return Ok(Path::trivial(start.clone(), metric));
    }

    // dist[v] = best known weight to reach v; prev[v] = predecessor on that path.
    let mut dist:    FxHashMap<&LocationId, f64>         = FxHashMap::default();
    let mut prev:    FxHashMap<&LocationId, &LocationId> = FxHashMap::default();
    let mut settled: FxHashSet<&LocationId>              = FxHashSet::default();

    let mut seq = 0u64;
    let mut frontier = BinaryHeap::new();
    dist.insert(start, 0.0);
    frontier.push(Frontier { weight: 0.0, seq, node: start });

    while let Some(Frontier { weight, node, .. }) = frontier.pop() {
        // Stale entry for a node finalized earlier at a lower weight.
        if !settled.insert(node) {
            continue;
        }
        trace!("settled {node} at {weight}");

        if node == goal {
            return reconstruct(&prev, start, goal, weight, metric).ok_or_else(not_reachable);
        }

        for (neighbor, weights) in network.routes_from(node.as_str())? {
            if settled.contains(neighbor) {
                continue;
            }
            let candidate = weight + weights.get(metric);
            if dist.get(neighbor).is_none_or(|&best| candidate < best) {
                trace!("relax {node} → {neighbor}: {candidate}");
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, node);
                seq += 1;
                frontier.push(Frontier { weight: candidate, seq, node: neighbor });
            }
        }
    }

    Err(not_reachable())
}

fn reconstruct<'a>(
    prev:   &FxHashMap<&'a LocationId, &'a LocationId>,
    start:  &'a LocationId,
    goal:   &'a LocationId,
    weight: f64,
    metric: WeightMetric,
) -> Option<Path> {
    let mut locations = vec![goal.clone()];
    let mut cur = goal;
    while cur != start {
        cur = *prev.get(cur)?;
        locations.push(cur.clone());
    }
    locations.reverse();
    Path::from_parts(locations, weight, metric)
}
