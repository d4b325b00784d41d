//! `tm-spatial` — road graph, priority queue, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Graph`, `Location`, `Edge`, `Road`, `RoadClass`            |
//! | [`heap`]    | `MinHeap`, `DistEntry`, `AStarEntry`                        |
//! | [`weight`]  | `EdgeWeight` strategies, `traffic_weight`                   |
//! | [`engine`]  | `PathfindingEngine` (Dijkstra, A*), search results          |
//! | [`path`]    | predecessor-map path reconstruction                         |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`, `AStarRouter`    |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod engine;
pub mod error;
pub mod heap;
pub mod network;
pub mod path;
pub mod router;
pub mod weight;


pub use engine::{AStarPath, PathfindingEngine, ShortestPaths};
pub use error::{SpatialError, SpatialResult};
pub use heap::{AStarEntry, DistEntry, HeapEntry, MinHeap};
pub use network::{Edge, Graph, GraphStats, Location, NewLocation, Road, RoadClass};
pub use path::{reconstruct, reconstruct_reached};
pub use router::{AStarRouter, Algorithm, DijkstraRouter, Route, Router};
pub use weight::{BaseDistance, CurrentWeight, EdgeWeight, TrafficAware, traffic_weight};
