//! Simulated time model.
//!
//! # Design
//!
//! Time is a monotonically increasing count of simulated **microseconds**,
//! the resolution the sampling interval is configured in.  Using an integer
//! as the canonical unit means interval arithmetic is exact (no
//! floating-point drift across thousands of re-arms) and comparisons are
//! O(1).  Seconds exist only at the edges: configuration (`from_secs`) and
//! the trace log (`as_secs_f64`).

use std::fmt;

const MICROS_PER_SEC: u64 = 1_000_000;

/// An absolute instant of simulated time, in microseconds since the start of
/// the run.
///
/// Stored as `u64`: at microsecond resolution a u64 lasts ~585 000 years of
/// simulated time, far longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    #[inline]
    pub fn from_micros(us: u64) -> SimTime {
        SimTime(us)
    }

    #[inline]
    pub fn from_millis(ms: u64) -> SimTime {
        SimTime(ms * 1_000)
    }

    #[inline]
    pub fn from_secs(secs: u64) -> SimTime {
        SimTime(secs * MICROS_PER_SEC)
    }

    #[inline]
    pub fn as_micros(self) -> u64 {
        self.0
    }

    /// Seconds as a float, for derived metrics and the trace log.
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / MICROS_PER_SEC as f64
    }

    /// Elapsed fraction of `total`, as an integer-truncated percentage.
    ///
    /// Returns 0 when `total` is zero.
    pub fn percent_of(self, total: SimTime) -> u64 {
        if total.0 == 0 {
            return 0;
        }
        self.0 * 100 / total.0
    }

    #[inline]
    pub fn saturating_sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::Add for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 + rhs.0)
    }
}

impl std::ops::Sub for SimTime {
    type Output = SimTime;
    #[inline]
    fn sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0 - rhs.0)
    }
}

impl std::ops::Mul<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn mul(self, rhs: u64) -> SimTime {
        SimTime(self.0 * rhs)
    }
}

impl std::ops::Div<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn div(self, rhs: u64) -> SimTime {
        SimTime(self.0 / rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}s", self.as_secs_f64())
    }
}
