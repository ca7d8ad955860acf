//! The built-in demo network: one warehouse, two hubs, five cities.

use lro_core::Position;

use crate::{Network, NetworkResult};

/// `(name, (x, y))` of every sample location.
pub const SAMPLE_LOCATIONS: [(&str, (f64, f64)); 8] = [
    ("Warehouse", (0.1, 0.5)),
    ("City_A",    (0.3, 0.8)),
    ("City_B",    (0.5, 0.6)),
    ("City_C",    (0.7, 0.9)),
    ("City_D",    (0.6, 0.3)),
    ("City_E",    (0.9, 0.5)),
    ("Hub_1",     (0.4, 0.4)),
    ("Hub_2",     (0.7, 0.6)),
];

/// `(a, b, distance km, time min, cost $)` of every sample route.
pub const SAMPLE_ROUTES: [(&str, &str, f64, f64, f64); 12] = [
    ("Warehouse", "City_A", 25.0, 30.0, 15.0),
    ("Warehouse", "Hub_1",  20.0, 25.0, 12.0),
    ("City_A",    "City_B", 18.0, 22.0, 10.0),
    ("City_B",    "Hub_1",  15.0, 18.0,  9.0),
    ("City_B",    "City_C", 22.0, 28.0, 13.0),
    ("City_B",    "Hub_2",  16.0, 20.0, 11.0),
    ("City_C",    "Hub_2",  12.0, 15.0,  8.0),
    ("City_C",    "City_E", 20.0, 24.0, 12.0),
    ("Hub_1",     "City_D", 14.0, 17.0,  9.0),
    ("City_D",    "Hub_2",  13.0, 16.0,  8.0),
    ("City_D",    "City_E", 19.0, 23.0, 11.0),
    ("Hub_2",     "City_E", 17.0, 21.0, 10.0),
];

/// Build the sample delivery network.
///
/// ```
/// let net = lro_network::sample_network().unwrap();
/// assert_eq!(net.location_count(), 8);
/// assert_eq!(net.route_count(), 12);
/// ```
pub fn sample_network() -> NetworkResult<Network> {
    let mut net = Network::new();
    for (name, (x, y)) in SAMPLE_LOCATIONS {
        net.add_location(name, Position::new(x, y))?;
    }
    for (a, b, distance, time, cost) in SAMPLE_ROUTES {
        net.add_route(a, b, distance, time, cost)?;
    }
    Ok(net)
}
