//! Dijkstra and A* over a [`Graph`].
//!
//! # Search state
//!
//! Each call allocates its own distance, predecessor, and (A*) closed-set
//! vectors indexed by `NodeId`, and drops them on return.  The engine borrows
//! the graph immutably, so the graph cannot change while a search runs.
//!
//! # Lazy deletion
//!
//! A vertex is pushed again whenever a cheaper path to it is found.  Stale
//! copies are skipped when popped: Dijkstra compares the popped distance to
//! the recorded one, A* consults its closed set.
//!
//! # Tie-breaking
//!
//! Equal priorities pop in push order (see [`crate::heap`]) and neighbours
//! are relaxed newest edge first (see [`Graph::neighbours`]).

use tracing::{debug, trace};

use tm_core::{HourOfDay, NodeId};

use crate::heap::{AStarEntry, DistEntry, MinHeap};
use crate::network::Graph;
use crate::path::{reconstruct, reconstruct_reached};
use crate::weight::{CurrentWeight, EdgeWeight, TrafficAware};
use crate::{SpatialError, SpatialResult};

// ── Results ───────────────────────────────────────────────────────────────────

/// Output of [`PathfindingEngine::dijkstra`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    pub start: NodeId,
    /// Best known distance per node; `f64::INFINITY` when unreached.
    pub distances: Vec<f64>,
    /// Previous node on the best known path; `None` for the start and for
    /// unreached nodes.
    pub predecessors: Vec<Option<NodeId>>,
    /// Non-stale entries taken off the queue.
    pub explored: usize,
}

impl ShortestPaths {
    /// Finite distance to `node`, or `None` if it was not reached.
    pub fn distance_to(&self, node: NodeId) -> Option<f64> {
        self.distances
            .get(node.index())
            .copied()
            .filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance_to(node).is_some()
    }

    /// Ordered start → `node` path; empty when `node` was not reached.
    pub fn path_to(&self, node: NodeId) -> Vec<NodeId> {
        reconstruct_reached(node, &self.predecessors, &self.distances)
    }
}

/// Output of [`PathfindingEngine::astar`].
#[derive(Clone, Debug, PartialEq)]
pub struct AStarPath {
    /// Start → goal inclusive.  Empty when no path exists.
    pub path: Vec<NodeId>,
    /// g-cost of the goal.  Zero when no path exists.
    pub total_cost: f64,
    pub explored: usize,
}

impl AStarPath {
    fn not_found(explored: usize) -> Self {
        Self { path: Vec::new(), total_cost: 0.0, explored }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Shortest-path searches over a borrowed graph.
///
/// ```
/// use tm_core::{GeoPoint, HourOfDay};
/// use tm_spatial::{Graph, PathfindingEngine};
///
/// let mut g = Graph::new();
/// let a = g.add_location("A", GeoPoint::new(0.0, 0.0)).unwrap();
/// let b = g.add_location("B", GeoPoint::new(0.0, 1.0)).unwrap();
/// g.add_edge(a, b).unwrap();
///
/// let engine = PathfindingEngine::new(&g).with_hour(HourOfDay::NOON);
/// let sp = engine.dijkstra(a, b).unwrap();
/// assert_eq!(sp.path_to(b), vec![a, b]);
/// ```
pub struct PathfindingEngine<'g> {
    graph: &'g Graph,
    hour: HourOfDay,
}

impl<'g> PathfindingEngine<'g> {
    /// Engine using the current local hour as A*'s traffic context.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph, hour: HourOfDay::now() }
    }

    /// Fix the traffic context so A* results are reproducible.
    pub fn with_hour(mut self, hour: HourOfDay) -> Self {
        self.hour = hour;
        self
    }

    pub fn hour(&self) -> HourOfDay {
        self.hour
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Straight-line, elevation-aware distance from `from` to `to` in km.
    /// Zero if either id is unknown.
    pub fn heuristic(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.graph.get_location(from), self.graph.get_location(to)) {
            (Some(a), Some(b)) => a.pos.distance_3d_km(b.pos),
            _ => 0.0,
        }
    }

    fn check(&self, start: NodeId, end: NodeId) -> SpatialResult<()> {
        for id in [start, end] {
            if !self.graph.contains(id) {
                return Err(SpatialError::NodeNotFound(id));
            }
        }
        Ok(())
    }

    // ── Dijkstra ──────────────────────────────────────────────────────────

    /// Uniform-cost search from `start`, stopping once `end` is settled.
    /// Edge cost is each edge's `current_weight`.
    pub fn dijkstra(&self, start: NodeId, end: NodeId) -> SpatialResult<ShortestPaths> {
        self.dijkstra_with(start, end, &CurrentWeight)
    }

    pub fn dijkstra_with<W: EdgeWeight + ?Sized>(
        &self,
        start: NodeId,
        end: NodeId,
        weight: &W,
    ) -> SpatialResult<ShortestPaths> {
        self.check(start, end)?;
        debug!(%start, %end, "dijkstra: search started");

        let n = self.graph.node_count();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        let mut explored = 0;

        let mut heap = MinHeap::with_capacity(self.graph.config().max_nodes);
        distances[start.index()] = 0.0;
        heap.push(DistEntry::new(start, 0.0));

        while let Some(DistEntry { vertex: u, dist }) = heap.pop_min() {
            // Skip stale heap entries.
            if dist > distances[u.index()] {
                continue;
            }
            explored += 1;

            if u == end {
                break;
            }

            for edge in self.graph.neighbours(u) {
                let v = edge.to;
                if !self.graph.is_active(v) {
                    continue;
                }
                let alt = distances[u.index()] + weight.weight(edge);
                if alt < distances[v.index()] {
                    trace!(%u, %v, alt, "dijkstra: relaxed");
                    distances[v.index()] = alt;
                    predecessors[v.index()] = Some(u);
                    heap.push(DistEntry::new(v, alt));
                }
            }
        }

        let result = ShortestPaths { start, distances, predecessors, explored };
        match result.distance_to(end) {
            Some(d) => debug!(%start, %end, km = d, explored, "dijkstra: path found"),
            None => debug!(%start, %end, explored, "dijkstra: no path"),
        }
        Ok(result)
    }

    // ── A* ────────────────────────────────────────────────────────────────

    /// Heuristic search from `start` to `end` with traffic-aware edge costs
    /// at the engine's hour.
    pub fn astar(&self, start: NodeId, end: NodeId) -> SpatialResult<AStarPath> {
        self.astar_with(start, end, &TrafficAware::new(self.hour))
    }

    pub fn astar_with<W: EdgeWeight + ?Sized>(
        &self,
        start: NodeId,
        end: NodeId,
        weight: &W,
    ) -> SpatialResult<AStarPath> {
        self.check(start, end)?;
        debug!(%start, %end, hour = %self.hour, "a*: search started");

        let n = self.graph.node_count();
        let mut g_costs = vec![f64::INFINITY; n];
        let mut parents: Vec<Option<NodeId>> = vec![None; n];
        let mut closed = vec![false; n];
        let mut explored = 0;

        let mut open = MinHeap::with_capacity(self.graph.config().max_nodes);
        g_costs[start.index()] = 0.0;
        open.push(AStarEntry::new(start, 0.0, self.heuristic(start, end), None));

        while let Some(current) = open.pop_min() {
            let u = current.vertex;
            if closed[u.index()] {
                continue;
            }
            explored += 1;

            if u == end {
                let path = reconstruct(end, &parents);
                let total_cost = g_costs[end.index()];
                debug!(%start, %end, cost = total_cost, explored, "a*: path found");
                return Ok(AStarPath { path, total_cost, explored });
            }

            closed[u.index()] = true;

            for edge in self.graph.neighbours(u) {
                let v = edge.to;
                if closed[v.index()] || !self.graph.is_active(v) {
                    continue;
                }
                let tentative = g_costs[u.index()] + weight.weight(edge);
                if tentative < g_costs[v.index()] {
                    trace!(%u, %v, tentative, "a*: relaxed");
                    g_costs[v.index()] = tentative;
                    parents[v.index()] = Some(u);
                    open.push(AStarEntry::new(v, tentative, self.heuristic(v, end), Some(u)));
                }
            }
        }

        debug!(%start, %end, explored, "a*: no path");
        Ok(AStarPath::not_found(explored))
    }
}
