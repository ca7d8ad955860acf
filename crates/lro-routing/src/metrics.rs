//! Route-level totals.
//!
//! Whatever metric a route was optimised for, the report covers all three:
//! a time-optimal route still has a distance and a cost.

use lro_core::{LocationId, RouteTotals};
use lro_network::Network;

use crate::{RoutingError, RoutingResult};

/// Sum distance, time and cost over every consecutive pair of `locations`.
///
/// A single location (or an empty slice) totals zero.  The locations may
/// come from outside the engine, so every pair is checked.
///
/// # Errors
///
/// [`RoutingError::BrokenPath`] at the first pair with no direct route.
///
/// ```
/// use lro_core::WeightMetric;
/// use lro_routing::{shortest_path, summarize};
///
/// let net = lro_network::sample_network().unwrap();
/// let path = shortest_path(&net, "Warehouse", "City_D", WeightMetric::Time).unwrap();
/// let totals = summarize(&net, path.locations()).unwrap();
/// assert_eq!(totals.time, path.weight());
/// assert_eq!(totals.distance, 34.0);
/// ```
pub fn summarize<S: AsRef<str>>(network: &Network, locations: &[S]) -> RoutingResult<RouteTotals> {
    locations
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
            network.route(from, to).copied().ok_or_else(|| RoutingError::BrokenPath {
                from: LocationId::new(from),
                to:   LocationId::new(to),
            })
        })
        .sum()
}
