use lro_core::LocationId;
use lro_network::NetworkError;
use thiserror::Error;

/// Errors produced by the routing engine.
///
/// `NotReachable` is an ordinary outcome of a query (a user picked a stop in
/// another component), not a failure of the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("location {0} not found in network")]
    UnknownLocation(LocationId),

    #[error("no route from {from} to {to}")]
    NotReachable { from: LocationId, to: LocationId },

    #[error("path is broken: no route between {from} and {to}")]
    BrokenPath { from: LocationId, to: LocationId },

    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
