//! Road graph representation.
//!
//! # Data layout
//!
//! Locations live in a dense `Vec` indexed by `NodeId`; each location owns a
//! `Vec<Edge>` of outgoing road segments.  Every road is stored twice, once on
//! each endpoint, with identical length and road metadata.
//!
//! Edges are append-only.  [`Graph::neighbours`] yields them newest first so
//! that search tie-breaking matches a prepend-style adjacency list.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to snap a raw GPS fix to the closest location on the network.

use std::fmt;

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::warn;

use tm_core::{CoreError, GeoPoint, NetworkConfig, NodeId};

use crate::weight::EdgeWeight;
use crate::{SpatialError, SpatialResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough to pick the
    /// nearest location inside one city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Road metadata ─────────────────────────────────────────────────────────────

/// Categorical road type.  Free-form: unknown labels are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum RoadClass {
    Highway,
    #[default]
    Main,
    Local,
    Other(String),
}

impl RoadClass {
    pub fn as_str(&self) -> &str {
        match self {
            RoadClass::Highway  => "highway",
            RoadClass::Main     => "main",
            RoadClass::Local    => "local",
            RoadClass::Other(s) => s,
        }
    }
}

impl From<&str> for RoadClass {
    fn from(s: &str) -> Self {
        match s {
            "highway" => RoadClass::Highway,
            "main"    => RoadClass::Main,
            "local"   => RoadClass::Local,
            other     => RoadClass::Other(other.to_owned()),
        }
    }
}

impl From<String> for RoadClass {
    fn from(s: String) -> Self {
        RoadClass::from(s.as_str())
    }
}

impl From<RoadClass> for String {
    fn from(class: RoadClass) -> String {
        class.as_str().to_owned()
    }
}

impl fmt::Display for RoadClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a road added with [`Graph::add_road`].
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub class: RoadClass,
    /// Congestion multiplier input, `1..=3`.
    pub traffic_factor: u8,
    pub speed_limit_kmh: f64,
}

impl Road {
    pub fn new(class: impl Into<RoadClass>, traffic_factor: u8, speed_limit_kmh: f64) -> Self {
        Self { class: class.into(), traffic_factor, speed_limit_kmh }
    }
}

impl Default for Road {
    /// The metadata given to plain [`Graph::add_edge`] roads.
    fn default() -> Self {
        Self { class: RoadClass::Main, traffic_factor: 1, speed_limit_kmh: 50.0 }
    }
}

// ── Location & Edge ───────────────────────────────────────────────────────────

/// A named point on the network.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: NodeId,
    pub name: String,
    /// Category tag such as `"station"` or `"airport"`.  `None` = unspecified.
    pub kind: Option<String>,
    pub district: Option<String>,
    pub pos: GeoPoint,
    /// Local congestion rating, `1..=5`.
    pub traffic_level: u8,
    /// Inactive locations are skipped as neighbours during search.
    pub active: bool,
}

/// Everything needed to insert a location; the id is assigned by the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub kind: Option<String>,
    pub district: Option<String>,
    pub pos: GeoPoint,
    pub traffic_level: u8,
}

impl NewLocation {
    pub fn new(name: impl Into<String>, pos: GeoPoint) -> Self {
        Self {
            name: name.into(),
            kind: None,
            district: None,
            pos,
            traffic_level: 1,
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    pub fn elevation(mut self, elevation_m: f64) -> Self {
        self.pos.elevation_m = elevation_m;
        self
    }

    pub fn traffic_level(mut self, level: u8) -> Self {
        self.traffic_level = level;
        self
    }
}

/// One direction of a road segment, owned by its source location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: NodeId,
    /// Physical length in km, fixed at insertion.
    pub base_km: f64,
    /// Weight under the most recent [`Graph::refresh_weights`] context.
    /// Equal to `base_km` until refreshed.
    pub current_weight: f64,
    pub class: RoadClass,
    pub traffic_factor: u8,
    pub speed_limit_kmh: f64,
}

/// Summary counts returned by [`Graph::stats`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub active_nodes: usize,
    /// Directed edge records; two per road.
    pub edge_records: usize,
    pub roads: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes ({} active), {} edges ({} roads)",
            self.nodes, self.active_nodes, self.edge_records, self.roads
        )
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Bidirectional road graph with capacity limits and a nearest-node index.
pub struct Graph {
    config: NetworkConfig,
    locations: Vec<Location>,
    adjacency: Vec<Vec<Edge>>,
    edge_records: usize,
    spatial_idx: RTree<NodeEntry>,
}

impl Graph {
    /// Empty graph with the default [`NetworkConfig`] limits.
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            locations: Vec::with_capacity(config.max_nodes),
            adjacency: Vec::with_capacity(config.max_nodes),
            edge_records: 0,
            spatial_idx: RTree::new(),
            config,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of directed edge records (two per road).
    pub fn edge_count(&self) -> usize {
        self.edge_records
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.locations.len()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.locations.len(),
            active_nodes: self.locations.iter().filter(|l| l.active).count(),
            edge_records: self.edge_records,
            roads: self.edge_records / 2,
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Add a location with no category, district, or elevation and traffic
    /// level 1.
    pub fn add_location(&mut self, name: impl Into<String>, pos: GeoPoint) -> SpatialResult<NodeId> {
        self.add_location_with(NewLocation::new(name, pos))
    }

    /// Add a location with full metadata and return its `NodeId`
    /// (sequential from 0).
    pub fn add_location_with(&mut self, new: NewLocation) -> SpatialResult<NodeId> {
        if self.locations.len() >= self.config.max_nodes {
            warn!(name = %new.name, limit = self.config.max_nodes, "location refused: graph full");
            return Err(SpatialError::CapacityExceeded {
                what: "node",
                limit: self.config.max_nodes,
            });
        }
        if !(1..=5).contains(&new.traffic_level) {
            return Err(CoreError::InvalidTrafficLevel(new.traffic_level).into());
        }

        let id = NodeId::try_from(self.locations.len()).map_err(|_| SpatialError::CapacityExceeded {
            what: "node",
            limit: self.config.max_nodes,
        })?;
        self.spatial_idx.insert(NodeEntry {
            point: [new.pos.lat, new.pos.lon],
            id,
        });
        self.locations.push(Location {
            id,
            name: new.name,
            kind: new.kind,
            district: new.district,
            pos: new.pos,
            traffic_level: new.traffic_level,
            active: true,
        });
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Add a plain road between `a` and `b`: great-circle length (elevation
    /// ignored), class `main`, traffic factor 1, 50 km/h.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> SpatialResult<()> {
        let length = self.pos(a)?.distance_km(self.pos(b)?);
        self.insert_pair(a, b, length, Road::default())
    }

    /// Add a road between `a` and `b` with explicit metadata.  The length is
    /// the elevation-aware 3-D distance between the endpoints.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, road: Road) -> SpatialResult<()> {
        if !(1..=3).contains(&road.traffic_factor) {
            return Err(CoreError::InvalidTrafficFactor(road.traffic_factor).into());
        }
        let length = self.pos(a)?.distance_3d_km(self.pos(b)?);
        self.insert_pair(a, b, length, road)
    }

    fn insert_pair(&mut self, a: NodeId, b: NodeId, base_km: f64, road: Road) -> SpatialResult<()> {
        if self.edge_records + 2 > self.config.max_edges {
            warn!(%a, %b, limit = self.config.max_edges, "road refused: edge capacity reached");
            return Err(SpatialError::CapacityExceeded {
                what: "edge",
                limit: self.config.max_edges,
            });
        }

        let forward = Edge {
            to: b,
            base_km,
            current_weight: base_km,
            class: road.class,
            traffic_factor: road.traffic_factor,
            speed_limit_kmh: road.speed_limit_kmh,
        };
        let reverse = Edge { to: a, ..forward.clone() };

        self.adjacency[a.index()].push(forward);
        self.adjacency[b.index()].push(reverse);
        self.edge_records += 2;
        Ok(())
    }

    /// Drop every location and road.  The configuration is kept.
    pub fn clear(&mut self) {
        self.locations.clear();
        self.adjacency.clear();
        self.edge_records = 0;
        self.spatial_idx = RTree::new();
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The location with `id`, or `None` if out of range.
    pub fn get_location(&self, id: NodeId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn location(&self, id: NodeId) -> SpatialResult<&Location> {
        self.get_location(id).ok_or(SpatialError::NodeNotFound(id))
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }

    /// First location whose name matches exactly (linear scan).
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.locations.iter().find(|l| l.name == name).map(|l| l.id)
    }

    pub fn find_by_name_or_err(&self, name: &str) -> SpatialResult<NodeId> {
        self.find_by_name(name)
            .ok_or_else(|| SpatialError::LocationNotFound(name.to_owned()))
    }

    fn pos(&self, id: NodeId) -> SpatialResult<GeoPoint> {
        self.location(id).map(|l| l.pos)
    }

    #[inline]
    pub fn is_active(&self, id: NodeId) -> bool {
        self.locations.get(id.index()).is_some_and(|l| l.active)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing edges of `id`, most recently added first.  Empty for an
    /// unknown id.
    pub fn neighbours(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .get(id.index())
            .into_iter()
            .flat_map(|edges| edges.iter().rev())
    }

    /// Out-degree of `id` (number of outgoing edge records).
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(id.index()).map_or(0, Vec::len)
    }

    // ── Dynamic state ─────────────────────────────────────────────────────

    /// Close a location: searches skip it as a neighbour.
    pub fn deactivate(&mut self, id: NodeId) -> SpatialResult<()> {
        self.set_active(id, false)
    }

    pub fn activate(&mut self, id: NodeId) -> SpatialResult<()> {
        self.set_active(id, true)
    }

    fn set_active(&mut self, id: NodeId, active: bool) -> SpatialResult<()> {
        let loc = self
            .locations
            .get_mut(id.index())
            .ok_or(SpatialError::NodeNotFound(id))?;
        loc.active = active;
        Ok(())
    }

    /// Recompute every edge's `current_weight` from its base length under
    /// `weight`.  `base_km` is never modified.
    pub fn refresh_weights<W: EdgeWeight + ?Sized>(&mut self, weight: &W) {
        for edge in self.adjacency.iter_mut().flatten() {
            edge.current_weight = weight.weight(edge);
        }
    }

    /// Restore `current_weight == base_km` on every edge.
    pub fn reset_weights(&mut self) {
        for edge in self.adjacency.iter_mut().flatten() {
            edge.current_weight = edge.base_km;
        }
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The nearest *active* location to `pos`, or `None` if there is none.
    pub fn nearest_location(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .map(|e| e.id)
            .find(|&id| self.is_active(id))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
