//! Edge-weight strategies.
//!
//! Both search algorithms take the weight of an edge from an [`EdgeWeight`]
//! implementation chosen at call time, so the plain and traffic-aware
//! behaviours share one engine.
//!
//! # Traffic model
//!
//! `weight = base_km × time_multiplier × road_multiplier`
//!
//! | Period                  | Time multiplier                 |
//! |-------------------------|---------------------------------|
//! | Rush (07–09, 18–20)     | `1.5 + 0.3 × traffic_factor`    |
//! | Night (22–23, 00–06)    | `0.8`                           |
//! | Normal                  | `1.0`                           |
//!
//! | Road class | Multiplier |
//! |------------|------------|
//! | highway    | 0.8        |
//! | main       | 1.0        |
//! | local      | 1.2        |
//! | other      | 1.0        |

use tm_core::{HourOfDay, TrafficPeriod};

use crate::network::{Edge, RoadClass};

/// Pluggable edge cost.
pub trait EdgeWeight {
    fn weight(&self, edge: &Edge) -> f64;
}

impl<F> EdgeWeight for F
where
    F: Fn(&Edge) -> f64,
{
    fn weight(&self, edge: &Edge) -> f64 {
        self(edge)
    }
}

/// Physical length in km.
#[derive(Copy, Clone, Debug, Default)]
pub struct BaseDistance;

impl EdgeWeight for BaseDistance {
    #[inline]
    fn weight(&self, edge: &Edge) -> f64 {
        edge.base_km
    }
}

/// The weight stored on the edge by the last `Graph::refresh_weights`.
#[derive(Copy, Clone, Debug, Default)]
pub struct CurrentWeight;

impl EdgeWeight for CurrentWeight {
    #[inline]
    fn weight(&self, edge: &Edge) -> f64 {
        edge.current_weight
    }
}

/// Time-of-day and road-class adjusted length, see [`traffic_weight`].
#[derive(Copy, Clone, Debug)]
pub struct TrafficAware {
    pub hour: HourOfDay,
}

impl TrafficAware {
    pub fn new(hour: HourOfDay) -> Self {
        Self { hour }
    }
}

impl EdgeWeight for TrafficAware {
    #[inline]
    fn weight(&self, edge: &Edge) -> f64 {
        traffic_weight(edge, self.hour)
    }
}

/// Multiplier for the traffic period containing `hour`.
pub fn time_multiplier(hour: HourOfDay, traffic_factor: u8) -> f64 {
    match hour.period() {
        TrafficPeriod::Rush   => 1.5 + 0.3 * f64::from(traffic_factor),
        TrafficPeriod::Night  => 0.8,
        TrafficPeriod::Normal => 1.0,
    }
}

pub fn road_multiplier(class: &RoadClass) -> f64 {
    match class {
        RoadClass::Highway  => 0.8,
        RoadClass::Local    => 1.2,
        RoadClass::Main     => 1.0,
        RoadClass::Other(_) => 1.0,
    }
}

/// Traversal cost of `edge` at `hour`.  Depends on nothing but its inputs.
pub fn traffic_weight(edge: &Edge, hour: HourOfDay) -> f64 {
    edge.base_km * time_multiplier(hour, edge.traffic_factor) * road_multiplier(&edge.class)
}
