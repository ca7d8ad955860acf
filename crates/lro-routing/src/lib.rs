//! `lro-routing` — the routing engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`path`]    | `Path` — ordered locations plus the summed metric weight       |
//! | [`router`]  | `Router` trait, `DijkstraRouter`, `shortest_path`              |
//! | [`planner`] | `MultiStopPlanner`, `Plan` — greedy nearest-unvisited-stop     |
//! | [`metrics`] | `summarize` — distance/time/cost totals along a path           |
//! | [`service`] | `RoutingService` — network + planner behind one lock           |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                             |
//!
//! # Data flow
//!
//! ```text
//! Network ──adjacency──▶ Router ──legs──▶ MultiStopPlanner ──Path──▶ summarize
//! ```
//!
//! The engine only ever borrows the [`Network`](lro_network::Network)
//! immutably; mutations go through the network (or the service) directly.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Runs each planner iteration's candidate legs on Rayon.      |
//! | `serde`    | Derives `Serialize` on `Path`, `Plan` and `RouteReport`.    |

pub mod error;
pub mod metrics;
pub mod path;
pub mod planner;
pub mod router;
pub mod service;


pub use error::{RoutingError, RoutingResult};
pub use metrics::summarize;
pub use path::Path;
pub use planner::{MultiStopPlanner, Plan};
pub use router::{DijkstraRouter, Router, shortest_path};
pub use service::{RouteReport, RoutingService};
