//! Geographic coordinate type and geodesic metrics.
//!
//! `GeoPoint` stores latitude/longitude in degrees and elevation in metres as
//! `f64`.  Route totals are sums of many short legs, so double precision keeps
//! the Dijkstra and A* totals comparable to well below a metre.

use std::fmt;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// A WGS-84 coordinate with an optional height above sea level.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    /// Height above sea level in metres.  Zero when unknown.
    pub elevation_m: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, elevation_m: 0.0 }
    }

    #[inline]
    pub fn with_elevation(self, elevation_m: f64) -> Self {
        Self { elevation_m, ..self }
    }

    /// Haversine great-circle distance in kilometres.  Ignores elevation.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let h = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Straight-line distance in kilometres including the elevation delta.
    ///
    /// The horizontal haversine leg and the vertical leg are combined with
    /// Pythagoras.  Used both as the physical length of enhanced roads and as
    /// the A* heuristic.
    pub fn distance_3d_km(self, other: GeoPoint) -> f64 {
        let horizontal = self.distance_km(other);
        let vertical = (other.elevation_m - self.elevation_m) / 1_000.0;
        horizontal.hypot(vertical)
    }

    /// Initial compass bearing from `self` towards `other`, in `[0, 360)`.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let deg = y.atan2(x).to_degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
        if deg >= 360.0 { 0.0 } else { deg }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Compass ───────────────────────────────────────────────────────────────────

/// Eight-point compass direction, used to describe route legs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Compass {
    /// Bucket a bearing in degrees into one of eight 45° sectors centred on
    /// the cardinal and intercardinal directions.
    pub fn from_bearing(deg: f64) -> Self {
        const POINTS: [Compass; 8] = [
            Compass::N,
            Compass::NE,
            Compass::E,
            Compass::SE,
            Compass::S,
            Compass::SW,
            Compass::W,
            Compass::NW,
        ];
        let sector = ((deg.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
        POINTS[sector]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Compass::N  => "N",
            Compass::NE => "NE",
            Compass::E  => "E",
            Compass::SE => "SE",
            Compass::S  => "S",
            Compass::SW => "SW",
            Compass::W  => "W",
            Compass::NW => "NW",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
