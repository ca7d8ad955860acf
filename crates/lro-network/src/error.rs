//! Network-model error type.

use thiserror::Error;

use lro_core::{CoreError, LocationId, Position};

/// Errors produced by `lro-network` mutations and lookups.
///
/// All variants are recoverable; a failed mutation leaves the network
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    #[error("location {0} already exists")]
    DuplicateLocation(LocationId),

    #[error("location {0} not found in network")]
    UnknownLocation(LocationId),

    #[error("location {id} has a non-finite position {position}")]
    InvalidPosition { id: LocationId, position: Position },

    #[error("route from {0} to itself is not allowed")]
    SelfLoop(LocationId),

    #[error(transparent)]
    InvalidWeight(#[from] CoreError),

    #[error("no direct route between {a} and {b}")]
    NoSuchRoute { a: LocationId, b: LocationId },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
