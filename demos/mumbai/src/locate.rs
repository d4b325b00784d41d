//! Turning a `--from` / `--to` argument into a location id.
//!
//! Accepted forms, tried in order:
//!
//! | Form          | Example           | Resolution                          |
//! |---------------|-------------------|-------------------------------------|
//! | numeric id    | `3`               | must be in range                    |
//! | `lat,lon`     | `19.05,72.84`     | snapped to the nearest active place |
//! | exact name    | `Powai Lake`      | first active match                  |

use anyhow::{Result, bail};
use tracing::info;

use tm_core::{GeoPoint, NodeId};
use tm_spatial::Graph;

pub fn resolve(graph: &Graph, key: &str) -> Result<NodeId> {
    if let Ok(n) = key.parse::<u32>() {
        let id = NodeId(n);
        if !graph.contains(id) {
            bail!("location id {n} is out of range (0..{})", graph.node_count());
        }
        return Ok(id);
    }
    if let Some(pos) = parse_coordinates(key)? {
        let Some(id) = graph.nearest_location(pos) else {
            bail!("no active location to snap {key} to");
        };
        info!(input = key, snapped = %graph.location(id)?.name, "coordinates snapped");
        return Ok(id);
    }
    Ok(graph.find_by_name_or_err(key)?)
}

/// `Ok(None)` when `key` is not of the form `lat,lon`.
fn parse_coordinates(key: &str) -> Result<Option<GeoPoint>> {
    let Some((lat, lon)) = key.split_once(',') else {
        return Ok(None);
    };
    let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) else {
        return Ok(None);
    };
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        bail!("coordinates {lat},{lon} are outside the valid latitude/longitude range");
    }
    Ok(Some(GeoPoint::new(lat, lon)))
}

#[cfg(test)]
mod tests {
    use tm_core::{GeoPoint, NetworkConfig, NodeId};
    use tm_spatial::Graph;

    use super::resolve;
    use crate::network::build_enhanced;

    fn mumbai() -> Graph {
        build_enhanced(NetworkConfig::default()).unwrap()
    }

    #[test]
    fn numeric_id() {
        assert_eq!(resolve(&mumbai(), "3").unwrap(), NodeId(3));
        assert!(resolve(&mumbai(), "10").is_err());
    }

    #[test]
    fn exact_name() {
        assert_eq!(resolve(&mumbai(), "Powai Lake").unwrap(), NodeId(3));
        assert!(resolve(&mumbai(), "Atlantis").is_err());
    }

    #[test]
    fn coordinates_snap_to_nearest_location() {
        let g = mumbai();
        assert_eq!(resolve(&g, "19.05,72.84").unwrap(), NodeId(0)); // Bandra Station
        assert_eq!(resolve(&g, " 18.91 , 72.815 ").unwrap(), NodeId(8)); // Colaba Causeway
    }

    #[test]
    fn coordinates_skip_closed_locations() {
        let mut g = mumbai();
        g.deactivate(NodeId(0)).unwrap();
        assert_ne!(resolve(&g, "19.05,72.84").unwrap(), NodeId(0));
    }

    #[test]
    fn coordinates_out_of_range_are_rejected() {
        assert!(resolve(&mumbai(), "95.0,72.84").is_err());
        assert!(resolve(&mumbai(), "19.05,200").is_err());
    }

    #[test]
    fn empty_network_has_nothing_to_snap_to() {
        let g = Graph::new();
        assert!(resolve(&g, "19.05,72.84").is_err());
        assert_eq!(g.nearest_location(GeoPoint::new(19.05, 72.84)), None);
    }
}
