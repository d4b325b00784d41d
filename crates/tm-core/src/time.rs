//! Time-of-day model for traffic-aware routing.
//!
//! Routing only cares about the local hour: it selects the traffic period,
//! which in turn selects the edge-weight multiplier.  Searches take the hour
//! as a value and never read the clock themselves.

use std::fmt;

use chrono::{Local, Timelike};

use crate::{CoreError, CoreResult};

// ── HourOfDay ─────────────────────────────────────────────────────────────────

/// A validated hour of the day, `0..=23`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const MIDNIGHT: HourOfDay = HourOfDay(0);
    pub const NOON: HourOfDay = HourOfDay(12);

    pub fn new(hour: u8) -> CoreResult<Self> {
        if hour <= 23 {
            Ok(Self(hour))
        } else {
            Err(CoreError::InvalidHour(hour))
        }
    }

    /// The current hour on the local wall clock.
    pub fn now() -> Self {
        // chrono guarantees 0..=23.
        Self(Local::now().hour() as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn period(self) -> TrafficPeriod {
        TrafficPeriod::of(self)
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = CoreError;
    fn try_from(hour: u8) -> CoreResult<Self> {
        Self::new(hour)
    }
}

impl From<HourOfDay> for u8 {
    fn from(hour: HourOfDay) -> u8 {
        hour.0
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

// ── TrafficPeriod ─────────────────────────────────────────────────────────────

/// Coarse traffic regime for an hour of the day.
///
/// | Period  | Hours                 |
/// |---------|-----------------------|
/// | `Rush`  | 07–09, 18–20          |
/// | `Night` | 22–23, 00–06          |
/// | `Normal`| everything else       |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficPeriod {
    Rush,
    Night,
    Normal,
}

impl TrafficPeriod {
    pub fn of(hour: HourOfDay) -> Self {
        match hour.get() {
            7..=9 | 18..=20 => TrafficPeriod::Rush,
            22..=23 | 0..=6 => TrafficPeriod::Night,
            _ => TrafficPeriod::Normal,
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficPeriod::Rush   => "rush",
            TrafficPeriod::Night  => "night",
            TrafficPeriod::Normal => "normal",
        }
    }
}

impl fmt::Display for TrafficPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
