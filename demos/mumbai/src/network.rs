//! Mumbai road network definitions.
//!
//! `basic`: 7 locations, plain roads (haversine length, all `main`).
//! `enhanced`: the same 7 plus Worli, Colaba and Marine Drive, with
//! categories, districts, elevation, traffic levels and typed roads.

use tm_core::{GeoPoint, NetworkConfig};
use tm_spatial::{Graph, NewLocation, Road, SpatialResult};

// (name, lat, lon)
const BASIC_LOCATIONS: [(&str, f64, f64); 7] = [
    ("Bandra Station",       19.0544, 72.8406),
    ("Kurla Junction",       19.0728, 72.8826),
    ("Andheri East",         19.1136, 72.8697),
    ("Powai Lake",           19.1188, 72.9073),
    ("Mumbai Airport",       19.0896, 72.8656),
    ("Bandra-Kurla Complex", 19.0633, 72.8682),
    ("Mahim Junction",       19.0410, 72.8397),
];

const BASIC_ROADS: [(u32, u32); 9] = [
    (0, 1), (0, 5), (0, 6),
    (1, 2), (1, 5),
    (2, 3), (2, 4),
    (4, 5),
    (5, 6),
];

// (name, lat, lon, kind, district, elevation_m, traffic_level)
const ENHANCED_LOCATIONS: [(&str, f64, f64, &str, &str, f64, u8); 10] = [
    ("Bandra Station",       19.0544, 72.8406, "station",    "Bandra",        12.0, 4),
    ("Kurla Junction",       19.0728, 72.8826, "station",    "Kurla",         15.0, 5),
    ("Andheri East",         19.1136, 72.8697, "business",   "Andheri",       18.0, 4),
    ("Powai Lake",           19.1188, 72.9073, "landmark",   "Powai",         25.0, 2),
    ("Mumbai Airport",       19.0896, 72.8656, "airport",    "Andheri",       11.0, 3),
    ("Bandra-Kurla Complex", 19.0633, 72.8682, "business",   "BKC",           14.0, 5),
    ("Mahim Junction",       19.0410, 72.8397, "station",    "Mahim",         10.0, 3),
    ("Worli Sea Face",       19.0176, 72.8181, "landmark",   "Worli",          8.0, 2),
    ("Colaba Causeway",      18.9067, 72.8147, "commercial", "Colaba",         5.0, 3),
    ("Marine Drive",         18.9427, 72.8245, "landmark",   "Nariman Point",  7.0, 2),
];

// (a, b, class, traffic_factor, speed_limit_kmh)
const ENHANCED_ROADS: [(u32, u32, &str, u8, f64); 13] = [
    (0, 1, "main",    2, 60.0),
    (0, 5, "highway", 1, 80.0),
    (0, 6, "main",    2, 50.0),
    (1, 2, "highway", 1, 80.0),
    (1, 5, "main",    3, 40.0),
    (2, 3, "local",   2, 40.0),
    (2, 4, "highway", 1, 60.0),
    (4, 5, "highway", 2, 70.0),
    (5, 6, "main",    2, 50.0),
    (6, 7, "main",    2, 60.0),
    (7, 8, "highway", 2, 80.0),
    (7, 9, "main",    2, 50.0),
    (8, 9, "local",   3, 30.0),
];

/// Build the 7-location network with plain roads.
pub fn build_basic(config: NetworkConfig) -> SpatialResult<Graph> {
    let mut g = Graph::with_config(config);
    let ids = BASIC_LOCATIONS
        .iter()
        .map(|&(name, lat, lon)| g.add_location(name, GeoPoint::new(lat, lon)))
        .collect::<SpatialResult<Vec<_>>>()?;
    for (a, b) in BASIC_ROADS {
        g.add_edge(ids[a as usize], ids[b as usize])?;
    }
    Ok(g)
}

/// Build the 10-location network with full metadata and typed roads.
pub fn build_enhanced(config: NetworkConfig) -> SpatialResult<Graph> {
    let mut g = Graph::with_config(config);
    let ids = ENHANCED_LOCATIONS
        .iter()
        .map(|&(name, lat, lon, kind, district, elevation, traffic)| {
            g.add_location_with(
                NewLocation::new(name, GeoPoint::new(lat, lon))
                    .kind(kind)
                    .district(district)
                    .elevation(elevation)
                    .traffic_level(traffic),
            )
        })
        .collect::<SpatialResult<Vec<_>>>()?;
    for (a, b, class, factor, speed) in ENHANCED_ROADS {
        g.add_road(ids[a as usize], ids[b as usize], Road::new(class, factor, speed))?;
    }
    Ok(g)
}
