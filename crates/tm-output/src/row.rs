//! Plain data rows describing the locations on a route.

use serde::Serialize;

use tm_core::GeoPoint;
use tm_spatial::Location;

/// Start or end of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    pub id:        u32,
    pub name:      String,
    #[serde(rename = "type")]
    pub kind:      Option<String>,
    pub district:  Option<String>,
    pub latitude:  f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl From<&Location> for Endpoint {
    fn from(loc: &Location) -> Self {
        Self {
            id:        loc.id.0,
            name:      loc.name.clone(),
            kind:      loc.kind.clone(),
            district:  loc.district.clone(),
            latitude:  loc.pos.lat,
            longitude: loc.pos.lon,
            elevation: loc.pos.elevation_m,
        }
    }
}

/// One location along a route.  `step` counts from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub id:            u32,
    pub name:          String,
    #[serde(rename = "type")]
    pub kind:          Option<String>,
    pub district:      Option<String>,
    pub latitude:      f64,
    pub longitude:     f64,
    pub elevation:     f64,
    pub traffic_level: u8,
    pub step:          usize,
}

impl Waypoint {
    pub fn new(loc: &Location, step: usize) -> Self {
        Self {
            id:            loc.id.0,
            name:          loc.name.clone(),
            kind:          loc.kind.clone(),
            district:      loc.district.clone(),
            latitude:      loc.pos.lat,
            longitude:     loc.pos.lon,
            elevation:     loc.pos.elevation_m,
            traffic_level: loc.traffic_level,
            step,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude).with_elevation(self.elevation)
    }
}
