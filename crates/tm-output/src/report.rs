//! The route report: everything a front end needs to show or export a route.
//!
//! Serialized layout:
//!
//! ```text
//! {
//!   "route": {
//!     "start": {..}, "end": {..},
//!     "statistics": {..},
//!     "path": [ {.., "step": 1}, .. ]
//!   },
//!   "metadata": { "status", "version", "algorithm", "features", "timestamp" }
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use tm_core::{Compass, NodeId};
use tm_spatial::router::DEFAULT_AVG_SPEED_KMH;
use tm_spatial::{Graph, Route};

use crate::row::{Endpoint, Waypoint};
use crate::{OutputError, OutputResult};

pub const REPORT_VERSION: &str = "2.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub route:    RouteSection,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSection {
    pub start:      Endpoint,
    pub end:        Endpoint,
    pub statistics: Statistics,
    pub path:       Vec<Waypoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Route cost in (possibly traffic-adjusted) km.
    pub total_distance:         f64,
    pub estimated_time_minutes: f64,
    pub waypoint_count:         usize,
    pub average_speed_kmh:      f64,
    pub algorithm_used:         &'static str,
    pub nodes_explored:         usize,
    pub traffic_considered:     bool,
    pub elevation_considered:   bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub status:    &'static str,
    pub version:   &'static str,
    pub algorithm: &'static str,
    pub features:  Vec<&'static str>,
    /// RFC 3339, UTC, whole seconds.
    pub timestamp: String,
}

/// Straight-line description of the hop between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from:        NodeId,
    pub to:          NodeId,
    pub km:          f64,
    pub bearing_deg: f64,
    pub heading:     Compass,
}

impl RouteReport {
    /// Report for `route`, stamped with the current time.
    pub fn new(graph: &Graph, route: &Route) -> OutputResult<Self> {
        Self::at(graph, route, Utc::now())
    }

    pub fn at(graph: &Graph, route: &Route, when: DateTime<Utc>) -> OutputResult<Self> {
        let (Some(&first), Some(&last)) = (route.nodes.first(), route.nodes.last()) else {
            return Err(OutputError::EmptyRoute);
        };

        let path = route
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &id)| -> OutputResult<Waypoint> {
                Ok(Waypoint::new(graph.location(id)?, i + 1))
            })
            .collect::<OutputResult<Vec<_>>>()?;

        let traffic_considered = route.hour.is_some();
        let elevation_considered = path.iter().any(|w| w.elevation != 0.0);
        let features = [
            (traffic_considered, "traffic_aware"),
            (elevation_considered, "elevation"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();

        Ok(Self {
            route: RouteSection {
                start: Endpoint::from(graph.location(first)?),
                end: Endpoint::from(graph.location(last)?),
                statistics: Statistics {
                    total_distance: route.total_cost,
                    estimated_time_minutes: route.estimated_minutes(DEFAULT_AVG_SPEED_KMH),
                    waypoint_count: path.len(),
                    average_speed_kmh: DEFAULT_AVG_SPEED_KMH,
                    algorithm_used: route.algorithm.as_str(),
                    nodes_explored: route.explored,
                    traffic_considered,
                    elevation_considered,
                },
                path,
            },
            metadata: Metadata {
                status: "success",
                version: REPORT_VERSION,
                algorithm: route.algorithm.as_str(),
                features,
                timestamp: when.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        })
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.route.path
    }

    pub fn statistics(&self) -> &Statistics {
        &self.route.statistics
    }

    /// Consecutive waypoint pairs with straight-line distance and heading.
    pub fn legs(&self) -> Vec<Leg> {
        self.route
            .path
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0].point(), pair[1].point());
                let bearing_deg = a.bearing_deg(b);
                Leg {
                    from: NodeId(pair[0].id),
                    to: NodeId(pair[1].id),
                    km: a.distance_3d_km(b),
                    bearing_deg,
                    heading: Compass::from_bearing(bearing_deg),
                }
            })
            .collect()
    }
}
