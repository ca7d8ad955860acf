//! `lro-network` — the delivery network the routing engine runs over.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network` — locations, undirected routes, layout R-tree     |
//! | [`sample`]  | `sample_network()` — the 8-location demo network           |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Invariants
//!
//! Every mutation either applies completely or returns an error and leaves
//! the network untouched.  After any sequence of mutations:
//!
//! - every route's endpoints exist as locations;
//! - there are no self-loops and at most one route per unordered pair;
//! - route `(a, b)` and route `(b, a)` are the same route.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `lro-core` value types. |

pub mod error;
pub mod network;
pub mod sample;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::Network;
pub use sample::sample_network;
