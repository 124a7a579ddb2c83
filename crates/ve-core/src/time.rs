//! Simulated time.
//!
//! # Design
//!
//! Time is continuous: a `SimTime` is a count of minutes since the venue
//! opened.  Dwell and inter-arrival times are exponential draws, so an
//! integer tick grid would either lose resolution or explode the number of
//! empty ticks.
//!
//! `f64` is not `Ord`, but the event queue needs a totally ordered key.
//! `SimTime` implements `Ord` via [`f64::total_cmp`]; constructors reject
//! NaN in debug builds, and every time in a run is produced by adding finite,
//! non-negative durations to `SimTime::ZERO`.

use std::cmp::Ordering;
use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in minutes since opening.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    #[inline]
    pub fn from_minutes(minutes: f64) -> Self {
        debug_assert!(!minutes.is_nan(), "SimTime cannot be NaN");
        SimTime(minutes)
    }

    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_minutes(hours * 60.0)
    }

    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }

    /// Minutes elapsed from `earlier` to `self` (never negative).
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }

    #[inline]
    pub fn max(self, other: SimTime) -> SimTime {
        if other > self { other } else { self }
    }
}

impl PartialEq for SimTime {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SimTime {}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, minutes: f64) -> SimTime {
        SimTime::from_minutes(self.0 + minutes)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}min", self.0)
    }
}
