//! `lro-core` — foundational types for the `lro` logistics route optimizer.
//!
//! This crate is a dependency of every other `lro-*` crate.  It has no
//! `lro-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `LocationId`                                           |
//! | [`geo`]      | `Position` (opaque layout payload for renderers)       |
//! | [`metric`]   | `WeightMetric` enum                                    |
//! | [`weights`]  | `RouteWeights`, `RouteTotals`                          |
//! | [`config`]   | `PlannerConfig`                                        |
//! | [`rng`]      | `LayoutRng` (seeded placement of new locations)        |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod metric;
pub mod rng;
pub mod weights;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Position;
pub use ids::LocationId;
pub use metric::WeightMetric;
pub use rng::LayoutRng;
pub use weights::{RouteTotals, RouteWeights};
