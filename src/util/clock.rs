//! Time values and clock sources.
//!
//! All scheduling arithmetic is done in seconds. [`Time`] can only hold finite,
//! non-negative values, so an invalid clock reading is rejected once at the
//! boundary instead of being checked on every tick.

use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

use parking_lot::Mutex;

use crate::core::SchedulerError;

/// A point on the scheduler's logical timeline, in seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time(f64);

impl Time {
    /// The origin of the timeline.
    pub const ZERO: Self = Self(0.0);

    /// Build a time value, rejecting negative and non-finite inputs.
    pub fn from_secs(secs: f64) -> Result<Self, SchedulerError> {
        if secs.is_finite() && secs >= 0.0 {
            Ok(Self(secs))
        } else {
            Err(SchedulerError::InvalidTime(secs))
        }
    }

    /// Seconds since the origin.
    #[must_use]
    pub const fn as_secs(self) -> f64 {
        self.0
    }

    /// The time `secs` later. Negative or non-finite offsets leave the value unchanged.
    #[must_use]
    pub fn after(self, secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            let next = self.0 + secs;
            if next.is_finite() {
                return Self(next);
            }
        }
        self
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

/// Monotonic source of "now".
pub trait Clock: Send + Sync {
    /// Current time. Successive calls never go backwards.
    fn now(&self) -> Time;
}

/// Virtual clock advanced explicitly by the host (simulations and tests).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Time>,
}

impl ManualClock {
    /// Create a clock reading `start`.
    #[must_use]
    pub const fn new(start: Time) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `secs` and return the new reading.
    pub fn advance(&self, secs: f64) -> Result<Time, SchedulerError> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(SchedulerError::InvalidTime(secs));
        }
        let mut now = self.now.lock();
        *now = Time::from_secs(now.as_secs() + secs)?;
        Ok(*now)
    }

    /// Move the clock to `t`; earlier values are ignored to keep it monotonic.
    pub fn advance_to(&self, t: Time) -> Time {
        let mut now = self.now.lock();
        *now = (*now).max(t);
        *now
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Time {
        *self.now.lock()
    }
}

/// Wall clock measuring seconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Time(self.origin.elapsed().as_secs_f64())
    }
}
