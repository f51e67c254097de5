//! Service-day time model.
//!
//! # Design
//!
//! Schedule times are `f64` seconds measured from the start of the nominal
//! service day (00:00).  Feeds express everything inside one day window
//! (0–86 400), but the type deliberately allows values outside it: a
//! departure duplicated "one day earlier" carries a negative time, and one
//! duplicated "one day later" exceeds 86 400.  Downstream simulations
//! interpret such values as belonging to the previous/next day.
//!
//! Per-stop offsets may be *undefined*: the first stop of a route has no
//! arrival offset and the last stop has no departure offset.  That case is
//! modeled explicitly by [`TimeOffset`] instead of a floating-point
//! sentinel, so that resolution failures are visible at the type level.

use std::fmt;

/// Length of one nominal service day in seconds.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds since the start of the service day for `h:m:s`.
///
/// Convenience for call sites and tests; `hms(23, 55, 0)` reads better than
/// `86_100.0`.
#[inline]
pub fn hms(hours: u32, minutes: u32, seconds: u32) -> f64 {
    f64::from(hours) * 3_600.0 + f64::from(minutes) * 60.0 + f64::from(seconds)
}

// ── TimeOffset ────────────────────────────────────────────────────────────────

/// A per-stop arrival or departure offset relative to a route's nominal
/// start, or `Undefined` where the offset does not apply (no arrival at the
/// first stop, no departure at the last).
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOffset {
    /// Offset in seconds from the route's nominal start.
    Seconds(f64),
    /// No offset applies at this stop.
    #[default]
    Undefined,
}

impl TimeOffset {
    /// `true` if the offset carries a concrete value.
    #[inline]
    pub fn is_defined(&self) -> bool {
        matches!(self, TimeOffset::Seconds(_))
    }

    /// The offset value, or `None` when undefined.
    #[inline]
    pub fn seconds(&self) -> Option<f64> {
        match self {
            TimeOffset::Seconds(s) => Some(*s),
            TimeOffset::Undefined => None,
        }
    }

    /// This offset if defined, otherwise `other`.
    ///
    /// Used to resolve a terminal stop's arrival: prefer the arrival offset,
    /// fall back to the departure offset.
    #[inline]
    pub fn or(self, other: TimeOffset) -> TimeOffset {
        match self {
            TimeOffset::Seconds(_) => self,
            TimeOffset::Undefined => other,
        }
    }
}

impl From<f64> for TimeOffset {
    fn from(secs: f64) -> Self {
        TimeOffset::Seconds(secs)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOffset::Seconds(s) => write!(f, "{s}s"),
            TimeOffset::Undefined => f.write_str("undefined"),
        }
    }
}
