//! `tm-core` — foundational types for the `trackmate` routing workspace.
//!
//! This crate is a dependency of every other `tm-*` crate.  It has no `tm-*`
//! dependencies and minimal external ones (`chrono` for the wall clock and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `GeoPoint`, haversine / 3-D distance, bearing         |
//! | [`time`]        | `HourOfDay`, `TrafficPeriod`                          |
//! | [`config`]      | `NetworkConfig` capacity limits                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! `tm-output` enables `serde`.

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Compass, EARTH_RADIUS_KM, GeoPoint};
pub use ids::NodeId;
pub use time::{HourOfDay, TrafficPeriod};
