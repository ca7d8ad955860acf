//! Delivery network representation.
//!
//! # Data layout
//!
//! Locations live in a `BTreeMap` keyed by [`LocationId`].  Each entry owns
//! its layout position and its adjacency: a second `BTreeMap` from neighbour
//! to the [`RouteWeights`] of the connecting route.  An undirected route is
//! stored twice, once in each endpoint's adjacency, and every mutation
//! writes or erases both halves together.
//!
//! Both maps iterate in name order, so every query over the network visits
//! neighbours in a stable order without any extra sorting.
//!
//! # Layout index
//!
//! An R-tree (via `rstar`) maps layout positions to the nearest location.
//! It is updated on every add/remove and is never consulted by routing.

use std::collections::BTreeMap;

use log::{debug, warn};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use lro_core::{LayoutRng, LocationId, Position, RouteWeights, WeightMetric};

use crate::{NetworkError, NetworkResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the layout index: a `[x, y]` point with its location.
#[derive(Clone, PartialEq)]
struct LocationEntry {
    point: [f64; 2],
    id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
struct Node {
    position: Position,
    routes:   BTreeMap<LocationId, RouteWeights>,
}

/// Simple undirected weighted graph of named locations.
///
/// # Example
///
/// ```
/// use lro_core::{Position, WeightMetric};
/// use lro_network::Network;
///
/// let mut net = Network::new();
/// net.add_location("Warehouse", Position::new(0.1, 0.5)).unwrap();
/// net.add_location("Hub_1", Position::new(0.4, 0.4)).unwrap();
/// net.add_route("Warehouse", "Hub_1", 20.0, 25.0, 12.0).unwrap();
/// assert_eq!(net.route_count(), 1);
/// assert_eq!(net.weight("Hub_1", "Warehouse", WeightMetric::Time).unwrap(), 25.0);
/// ```
#[derive(Clone)]
pub struct Network {
    nodes:       BTreeMap<LocationId, Node>,
    route_count: usize,
    spatial_idx: RTree<LocationEntry>,
}

impl Network {
    /// An empty network with no locations or routes.
    pub fn new() -> Self {
        Self {
            nodes:       BTreeMap::new(),
            route_count: 0,
            spatial_idx: RTree::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected routes (each pair counted once).
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The stored id for `name`.  Cloning it shares the network's allocation.
    pub fn location_id(&self, name: &str) -> Option<&LocationId> {
        self.nodes.get_key_value(name).map(|(id, _)| id)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add an isolated location at `position`.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::DuplicateLocation`] if the name is already present.
    /// - [`NetworkError::InvalidPosition`] if either coordinate is NaN or
    ///   infinite.
    pub fn add_location(&mut self, name: impl Into<LocationId>, position: Position) -> NetworkResult<()> {
        let id = name.into();
        if !position.is_finite() {
            return Err(NetworkError::InvalidPosition { id, position });
        }
        if self.nodes.contains_key(&id) {
            return Err(NetworkError::DuplicateLocation(id));
        }

        self.spatial_idx.insert(LocationEntry { point: position.to_array(), id: id.clone() });
        debug!("added location {id} at {position}");
        self.nodes.insert(id, Node { position, routes: BTreeMap::new() });
        Ok(())
    }

    /// Add a location at a position drawn from `rng` and return the position.
    pub fn add_location_auto(
        &mut self,
        name: impl Into<LocationId>,
        rng:  &mut LayoutRng,
    ) -> NetworkResult<Position> {
        let id = name.into();
        if self.nodes.contains_key(&id) {
            return Err(NetworkError::DuplicateLocation(id));
        }
        let position = rng.next_position();
        self.add_location(id, position)?;
        Ok(position)
    }

    /// Remove a location together with every route touching it.
    ///
    /// Returns the number of routes removed (the location's prior degree).
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownLocation`] if the name is absent; nothing is
    /// removed in that case.
    pub fn remove_location(&mut self, name: &str) -> NetworkResult<usize> {
        let Some((id, node)) = self.nodes.remove_entry(name) else {
            return Err(NetworkError::UnknownLocation(LocationId::new(name)));
        };

        for neighbor in node.routes.keys() {
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.routes.remove(&id);
            }
        }
        let degree = node.routes.len();
        self.route_count -= degree;

        let entry = LocationEntry { point: node.position.to_array(), id: id.clone() };
        if self.spatial_idx.remove(&entry).is_none() {
            warn!("location {id} at {} missing from layout index", node.position);
            debug_assert!(false, "layout index out of sync for {id}");
        }
        debug!("removed location {id} and {degree} route(s)");
        Ok(degree)
    }

    /// Add the undirected route `a — b`, or overwrite its weights if the
    /// pair is already connected.
    ///
    /// Returns the previous weights when an existing route was overwritten.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::UnknownLocation`] if either endpoint is absent.
    /// - [`NetworkError::SelfLoop`] if `a == b`.
    /// - [`NetworkError::InvalidWeight`] if any weight is negative or not finite.
    pub fn add_route(
        &mut self,
        a:        &str,
        b:        &str,
        distance: f64,
        time:     f64,
        cost:     f64,
    ) -> NetworkResult<Option<RouteWeights>> {
        let (a_id, b_id) = (self.resolve(a)?, self.resolve(b)?);
        if a_id == b_id {
            return Err(NetworkError::SelfLoop(a_id));
        }
        let weights = RouteWeights::new(distance, time, cost)?;

        let previous = self.link(&a_id, &b_id, weights);
        self.link(&b_id, &a_id, weights);
        match previous {
            Some(old) => debug!("overwrote route {a_id} — {b_id}: {old} → {weights}"),
            None => {
                self.route_count += 1;
                debug!("added route {a_id} — {b_id}: {weights}");
            }
        }
        Ok(previous)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Locations directly connected to `name`, in name order.
    pub fn neighbors(&self, name: &str) -> NetworkResult<impl Iterator<Item = &LocationId> + '_> {
        Ok(self.node(name)?.routes.keys())
    }

    /// Routes leaving `name` as `(neighbour, weights)`, in neighbour order.
    pub fn routes_from(
        &self,
        name: &str,
    ) -> NetworkResult<impl Iterator<Item = (&LocationId, &RouteWeights)> + '_> {
        Ok(self.node(name)?.routes.iter())
    }

    /// Number of routes touching `name`.
    pub fn degree(&self, name: &str) -> NetworkResult<usize> {
        Ok(self.node(name)?.routes.len())
    }

    /// Weights of the direct route between `a` and `b`, if any.
    pub fn route(&self, a: &str, b: &str) -> Option<&RouteWeights> {
        self.nodes.get(a)?.routes.get(b)
    }

    /// The `metric` attribute of the direct route between `a` and `b`.
    ///
    /// # Errors
    ///
    /// [`NetworkError::NoSuchRoute`] if no route connects them directly.
    pub fn weight(&self, a: &str, b: &str, metric: WeightMetric) -> NetworkResult<f64> {
        self.route(a, b)
            .map(|w| w.get(metric))
            .ok_or_else(|| NetworkError::NoSuchRoute { a: LocationId::new(a), b: LocationId::new(b) })
    }

    /// All location ids, in name order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationId> + '_ {
        self.nodes.keys()
    }

    /// Every route exactly once, as `(a, b, weights)` with `a < b`.
    pub fn routes(&self) -> impl Iterator<Item = (&LocationId, &LocationId, &RouteWeights)> + '_ {
        self.nodes.iter().flat_map(|(a, node)| {
            node.routes
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, w)| (a, b, w))
        })
    }

    /// Layout position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<Position> {
        self.nodes.get(name).map(|n| n.position)
    }

    /// The location whose layout position is closest to `pos`.
    ///
    /// Returns `None` if the network has no locations or `pos` is not finite.
    pub fn nearest_location(&self, pos: Position) -> Option<&LocationId> {
        if !pos.is_finite() {
            return None;
        }
        self.spatial_idx.nearest_neighbor(&pos.to_array()).map(|e| &e.id)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn node(&self, name: &str) -> NetworkResult<&Node> {
        self.nodes
            .get(name)
            .ok_or_else(|| NetworkError::UnknownLocation(LocationId::new(name)))
    }

    fn resolve(&self, name: &str) -> NetworkResult<LocationId> {
        self.location_id(name)
            .cloned()
            .ok_or_else(|| NetworkError::UnknownLocation(LocationId::new(name)))
    }

    fn link(&mut self, from: &LocationId, to: &LocationId, weights: RouteWeights) -> Option<RouteWeights> {
        self.nodes
            .get_mut(from)
            .and_then(|node| node.routes.insert(to.clone(), weights))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
