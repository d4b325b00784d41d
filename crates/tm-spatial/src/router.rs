//! Routing trait and the two built-in routers.
//!
//! # Pluggability
//!
//! Front ends call routing through the [`Router`] trait, so the algorithm can
//! be chosen at run time (menu choice, CLI flag) without branching at every
//! call site.
//!
//! # Cost units
//!
//! A plain [`DijkstraRouter`] costs kilometres under each edge's
//! `current_weight`.  A* and an hour-pinned Dijkstra cost traffic-adjusted
//! kilometres; at a normal-traffic hour on `main` roads they equal physical
//! kilometres.  Two routes are only comparable when their [`Route::hour`]
//! agrees.

use std::fmt;

use tm_core::{HourOfDay, NodeId};

use crate::engine::PathfindingEngine;
use crate::network::Graph;
use crate::weight::TrafficAware;
use crate::{SpatialError, SpatialResult};

/// Average urban speed used for travel-time estimates.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 45.0;

// ── Algorithm ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar    => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the ordered locations and the total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Locations to visit in order, start and destination included.
    pub nodes: Vec<NodeId>,
    pub total_cost: f64,
    pub explored: usize,
    pub algorithm: Algorithm,
    /// Hour whose traffic weights priced the route; `None` for `current_weight`.
    pub hour: Option<HourOfDay>,
}

impl Route {
    /// Travel time in minutes at `avg_speed_kmh`.
    pub fn estimated_minutes(&self, avg_speed_kmh: f64) -> f64 {
        self.total_cost / avg_speed_kmh * 60.0
    }

    pub fn waypoint_count(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing algorithm.
pub trait Router: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// Compute a route from `from` to `to`.
    ///
    /// Returns [`SpatialError::NoRoute`] if `to` is unreachable; `from == to`
    /// yields a single-node route of cost 0.
    fn route(&self, graph: &Graph, from: NodeId, to: NodeId) -> SpatialResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Uniform-cost search.  `hour: None` relaxes each edge's `current_weight`;
/// `Some(hour)` prices edges with the same traffic weights A* uses.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter {
    pub hour: Option<HourOfDay>,
}

impl DijkstraRouter {
    pub fn at(hour: HourOfDay) -> Self {
        Self { hour: Some(hour) }
    }
}

impl Router for DijkstraRouter {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn route(&self, graph: &Graph, from: NodeId, to: NodeId) -> SpatialResult<Route> {
        let engine = PathfindingEngine::new(graph);
        let sp = match self.hour {
            Some(hour) => engine.dijkstra_with(from, to, &TrafficAware::new(hour))?,
            None => engine.dijkstra(from, to)?,
        };
        let total_cost = sp.distance_to(to).ok_or(SpatialError::NoRoute { from, to })?;
        Ok(Route {
            nodes: sp.path_to(to),
            total_cost,
            explored: sp.explored,
            algorithm: Algorithm::Dijkstra,
            hour: self.hour,
        })
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// Traffic-aware A*.  `hour: None` reads the local clock on every query.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter {
    pub hour: Option<HourOfDay>,
}

impl AStarRouter {
    pub fn at(hour: HourOfDay) -> Self {
        Self { hour: Some(hour) }
    }
}

impl Router for AStarRouter {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn route(&self, graph: &Graph, from: NodeId, to: NodeId) -> SpatialResult<Route> {
        let mut engine = PathfindingEngine::new(graph);
        if let Some(hour) = self.hour {
            engine = engine.with_hour(hour);
        }
        let found = engine.astar(from, to)?;
        if !found.is_found() {
            return Err(SpatialError::NoRoute { from, to });
        }
        Ok(Route {
            nodes: found.path,
            total_cost: found.total_cost,
            explored: found.explored,
            algorithm: Algorithm::AStar,
            hour: Some(engine.hour()),
        })
    }
}
