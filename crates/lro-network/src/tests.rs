//! Unit tests for lro-network.
//!
//! Most tests run against the sample network; the mutation tests build small
//! hand-crafted networks so counts are easy to check.

#[cfg(test)]
mod helpers {
    use lro_core::Position;

    use crate::Network;

    /// Triangle A—B—C plus an isolated D.
    ///
    ///   A (0,0) —— B (1,0)
    ///      \        /
    ///       C (0.5,1)        D (5,5)
    pub fn triangle() -> Network {
        let mut net = Network::new();
        net.add_location("A", Position::new(0.0, 0.0)).unwrap();
        net.add_location("B", Position::new(1.0, 0.0)).unwrap();
        net.add_location("C", Position::new(0.5, 1.0)).unwrap();
        net.add_location("D", Position::new(5.0, 5.0)).unwrap();
        net.add_route("A", "B", 1.0, 2.0, 3.0).unwrap();
        net.add_route("B", "C", 4.0, 5.0, 6.0).unwrap();
        net.add_route("C", "A", 7.0, 8.0, 9.0).unwrap();
        net
    }
}

// ── Locations ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod locations {
    use lro_core::{LayoutRng, LocationId, Position};

    use crate::{Network, NetworkError};

    #[test]
    fn empty_network() {
        let net = Network::new();
        assert!(net.is_empty());
        assert_eq!(net.location_count(), 0);
        assert_eq!(net.route_count(), 0);
        assert_eq!(net.locations().count(), 0);
    }

    #[test]
    fn add_location_is_isolated() {
        let mut net = Network::new();
        net.add_location("Depot", Position::default()).unwrap();
        assert!(net.contains("Depot"));
        assert_eq!(net.degree("Depot").unwrap(), 0);
        assert_eq!(net.neighbors("Depot").unwrap().count(), 0);
        assert_eq!(net.position("Depot"), Some(Position::new(0.5, 0.5)));
    }

    #[test]
    fn duplicate_location_rejected() {
        let mut net = super::helpers::triangle();
        let before = net.location_count();
        let err = net.add_location("A", Position::new(9.0, 9.0)).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateLocation(LocationId::new("A")));
        assert_eq!(net.location_count(), before);
        // Original position untouched.
        assert_eq!(net.position("A"), Some(Position::new(0.0, 0.0)));
    }

    #[test]
    fn locations_iterate_in_name_order() {
        let net = super::helpers::triangle();
        let names: Vec<&str> = net.locations().map(LocationId::as_str).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[test]
    fn auto_placement_uses_layout_square() {
        let mut net = Network::new();
        let mut rng = LayoutRng::new(1);
        let pos = net.add_location_auto("New", &mut rng).unwrap();
        assert!((0.1..=0.9).contains(&pos.x) && (0.1..=0.9).contains(&pos.y));
        assert_eq!(net.position("New"), Some(pos));
        assert!(matches!(
            net.add_location_auto("New", &mut rng),
            Err(NetworkError::DuplicateLocation(_))
        ));
    }
}

// ── Routes ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use lro_core::{CoreError, LocationId, RouteWeights, WeightMetric};

    use crate::NetworkError;

    #[test]
    fn route_is_undirected() {
        let net = super::helpers::triangle();
        assert_eq!(net.route("A", "B"), net.route("B", "A"));
        assert_eq!(net.weight("B", "A", WeightMetric::Cost).unwrap(), 3.0);
        assert_eq!(net.route_count(), 3);
    }

    #[test]
    fn second_add_overwrites() {
        let mut net = super::helpers::triangle();
        let previous = net.add_route("B", "A", 10.0, 20.0, 30.0).unwrap();
        assert_eq!(previous, Some(RouteWeights { distance: 1.0, time: 2.0, cost: 3.0 }));
        assert_eq!(net.route_count(), 3, "overwrite must not add an edge");
        assert_eq!(net.degree("A").unwrap(), 2);
        assert_eq!(net.weight("A", "B", WeightMetric::Distance).unwrap(), 10.0);
        assert_eq!(net.weight("B", "A", WeightMetric::Time).unwrap(), 20.0);
    }

    #[test]
    fn unknown_endpoint_rejected() {
        let mut net = super::helpers::triangle();
        let err = net.add_route("A", "Nowhere", 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, NetworkError::UnknownLocation(LocationId::new("Nowhere")));
        assert_eq!(net.route_count(), 3);
    }

    #[test]
    fn self_loop_rejected() {
        let mut net = super::helpers::triangle();
        let err = net.add_route("C", "C", 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, NetworkError::SelfLoop(LocationId::new("C")));
        assert_eq!(net.degree("C").unwrap(), 2);
    }

    #[test]
    fn invalid_weights_rejected_atomically() {
        let mut net = super::helpers::triangle();
        let err = net.add_route("A", "D", 1.0, -5.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::InvalidWeight(CoreError::InvalidWeight { metric: WeightMetric::Time, .. })
        ));
        assert!(net.route("A", "D").is_none());

        // An invalid overwrite leaves the existing weights in place.
        assert!(net.add_route("A", "B", f64::NAN, 1.0, 1.0).is_err());
        assert_eq!(net.weight("A", "B", WeightMetric::Distance).unwrap(), 1.0);
        assert_eq!(net.route_count(), 3);
    }

    #[test]
    fn weight_without_route() {
        let net = super::helpers::triangle();
        let err = net.weight("A", "D", WeightMetric::Distance).unwrap_err();
        assert_eq!(err, NetworkError::NoSuchRoute { a: LocationId::new("A"), b: LocationId::new("D") });
    }

    #[test]
    fn neighbors_of_unknown_location() {
        let net = super::helpers::triangle();
        assert!(matches!(net.neighbors("Z"), Err(NetworkError::UnknownLocation(_))));
    }

    #[test]
    fn routes_listed_once() {
        let net = super::helpers::triangle();
        let listed: Vec<(&str, &str)> = net.routes().map(|(a, b, _)| (a.as_str(), b.as_str())).collect();
        assert_eq!(listed, [("A", "B"), ("A", "C"), ("B", "C")]);
    }
}

// ── Removal ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod removal {
    use lro_core::LocationId;

    use crate::{NetworkError, sample_network};

    #[test]
    fn removes_exactly_incident_routes() {
        let mut net = sample_network().unwrap();
        let locations = net.location_count();
        let routes = net.route_count();
        let degree = net.degree("City_B").unwrap();
        assert_eq!(degree, 4);

        assert_eq!(net.remove_location("City_B").unwrap(), degree);
        assert_eq!(net.location_count(), locations - 1);
        assert_eq!(net.route_count(), routes - degree);
        assert!(!net.contains("City_B"));

        // No dangling adjacency anywhere.
        for id in net.locations() {
            assert!(net.neighbors(id.as_str()).unwrap().all(|n| n != "City_B"));
        }
        // Unrelated routes survive.
        assert!(net.route("City_C", "Hub_2").is_some());
        assert_eq!(net.routes().count(), net.route_count());
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut net = sample_network().unwrap();
        let err = net.remove_location("Atlantis").unwrap_err();
        assert_eq!(err, NetworkError::UnknownLocation(LocationId::new("Atlantis")));
        assert_eq!(net.location_count(), 8);
        assert_eq!(net.route_count(), 12);
    }

    #[test]
    fn name_can_be_reused_after_removal() {
        let mut net = sample_network().unwrap();
        net.remove_location("Hub_2").unwrap();
        net.add_location("Hub_2", lro_core::Position::new(0.2, 0.2)).unwrap();
        assert_eq!(net.degree("Hub_2").unwrap(), 0);
        assert_eq!(net.nearest_location(lro_core::Position::new(0.2, 0.2)).unwrap(), "Hub_2");
    }
}

// ── Layout index ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use lro_core::Position;

    use crate::{Network, sample_network};

    #[test]
    fn exact_position() {
        let net = sample_network().unwrap();
        assert_eq!(net.nearest_location(Position::new(0.1, 0.5)).unwrap(), "Warehouse");
    }

    #[test]
    fn closest_wins() {
        let net = super::helpers::triangle();
        assert_eq!(net.nearest_location(Position::new(0.9, 0.1)).unwrap(), "B");
        assert_eq!(net.nearest_location(Position::new(4.0, 4.0)).unwrap(), "D");
    }

    #[test]
    fn removed_locations_are_not_found() {
        let mut net = super::helpers::triangle();
        net.remove_location("D").unwrap();
        assert_ne!(net.nearest_location(Position::new(5.0, 5.0)).unwrap(), "D");
    }

    #[test]
    fn empty_network_returns_none() {
        assert!(Network::new().nearest_location(Position::default()).is_none());
    }

    #[test]
    fn non_finite_query_returns_none() {
        let net = super::helpers::triangle();
        assert!(net.nearest_location(Position::new(f64::NAN, 0.5)).is_none());
        assert!(net.nearest_location(Position::new(0.5, f64::INFINITY)).is_none());
    }

    #[test]
    fn index_tracks_repeated_add_and_remove() {
        let mut net = Network::new();
        for i in 0..50 {
            net.add_location(format!("N{i}"), Position::new(i as f64 * 0.01, 0.5)).unwrap();
        }
        for i in 0..50 {
            net.remove_location(&format!("N{i}")).unwrap();
        }
        assert!(net.is_empty());
        assert!(net.nearest_location(Position::default()).is_none());
    }
}

// ── Position validation ───────────────────────────────────────────────────────

#[cfg(test)]
mod positions {
    use lro_core::{LocationId, Position};

    use crate::{Network, NetworkError};

    fn rejected(pos: Position) {
        let mut net = Network::new();
        let err = net.add_location("Bad", pos).unwrap_err();
        assert_eq!(err, NetworkError::InvalidPosition { id: LocationId::new("Bad"), position: pos });
        assert!(!net.contains("Bad"));
        assert!(net.nearest_location(Position::default()).is_none());
    }

    #[test]
    fn nan_rejected() {
        rejected(Position::new(f64::NAN, 0.5));
        rejected(Position::new(0.5, f64::NAN));
    }

    #[test]
    fn infinity_rejected() {
        rejected(Position::new(f64::INFINITY, 0.5));
        rejected(Position::new(0.5, f64::NEG_INFINITY));
    }

    #[test]
    fn many_nan_inserts_never_panic() {
        let mut net = Network::new();
        for i in 0..50 {
            let res = net.add_location(format!("N{i}"), Position::new(f64::NAN, 0.5));
            assert!(matches!(res, Err(NetworkError::InvalidPosition { .. })));
        }
        assert!(net.is_empty());
    }

    #[test]
    fn rejected_location_leaves_no_ghost() {
        let mut net = super::helpers::triangle();
        assert!(net.add_location("Ghost", Position::new(f64::NAN, 0.5)).is_err());
        assert!(net.remove_location("Ghost").is_err());
        net.remove_location("D").unwrap();
        let nearest = net.nearest_location(Position::new(5.0, 5.0)).unwrap();
        assert!(net.contains(nearest.as_str()));
        assert_eq!(net.location_count(), 3);
    }

    #[test]
    fn extreme_but_finite_positions_accepted() {
        let mut net = Network::new();
        net.add_location("Far", Position::new(-1e300, 1e300)).unwrap();
        assert_eq!(net.nearest_location(Position::new(-1e300, 1e300)).unwrap(), "Far");
        net.remove_location("Far").unwrap();
        assert!(net.nearest_location(Position::default()).is_none());
    }
}

// ── Sample network ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sample {
    use lro_core::WeightMetric;

    use crate::sample_network;

    #[test]
    fn dimensions() {
        let net = sample_network().unwrap();
        assert_eq!(net.location_count(), 8);
        assert_eq!(net.route_count(), 12);
    }

    #[test]
    fn known_weights() {
        let net = sample_network().unwrap();
        assert_eq!(net.weight("Hub_2", "City_E", WeightMetric::Distance).unwrap(), 17.0);
        assert_eq!(net.weight("City_E", "Hub_2", WeightMetric::Time).unwrap(), 21.0);
        assert_eq!(net.weight("Warehouse", "Hub_1", WeightMetric::Cost).unwrap(), 12.0);
    }
}
