//! Timed swing interpolation driven by explicit elapsed time.
//!
//! A handler owns one [`SwingMotion`]. Starting a new swing replaces whatever
//! was in flight; there is never more than one arc per handler.

use glam::DVec3;

/// Shortest duration an arc can have, in seconds.
pub const MIN_DURATION: f64 = 0.001;

/// Ease-in-out curve with zero slope at both ends.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * 2.0f64.mul_add(-t, 3.0)
}

/// One swing: a sweep of `arc_degrees` about `axis` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingArc {
    /// Unit axis the blade rotates about.
    pub axis: DVec3,
    /// Total sweep in degrees.
    pub arc_degrees: f64,
    /// Seconds from start to end.
    pub duration: f64,
}

/// Interpolated state of an arc at some point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingPose {
    /// Axis of the arc being swung.
    pub axis: DVec3,
    /// Eased rotation from the start orientation, in degrees.
    pub angle_degrees: f64,
    /// Linear progress in `[0, 1]`.
    pub progress: f64,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    arc: SwingArc,
    progress: f64,
}

/// Restartable, cancellable swing interpolation.
#[derive(Debug, Clone, Default)]
pub struct SwingMotion {
    in_flight: Option<InFlight>,
    completed: u64,
}

impl SwingMotion {
    /// Idle motion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin `arc` from zero progress. Returns true if an unfinished arc was replaced.
    pub fn start(&mut self, arc: SwingArc) -> bool {
        let arc = SwingArc {
            duration: arc.duration.max(MIN_DURATION),
            ..arc
        };
        self.in_flight
            .replace(InFlight { arc, progress: 0.0 })
            .is_some()
    }

    /// Drop the in-flight arc. Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.in_flight.take().is_some()
    }

    /// Move the arc forward by `dt` seconds and return the pose reached.
    ///
    /// The arc is cleared once progress reaches one; the final pose is still
    /// returned from that call. Returns `None` when idle.
    pub fn advance(&mut self, dt: f64) -> Option<SwingPose> {
        let flight = self.in_flight.as_mut()?;
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        flight.progress = (flight.progress + dt / flight.arc.duration).min(1.0);

        let pose = SwingPose {
            axis: flight.arc.axis,
            angle_degrees: flight.arc.arc_degrees * ease_in_out(flight.progress),
            progress: flight.progress,
        };
        if flight.progress >= 1.0 {
            self.in_flight = None;
            self.completed += 1;
        }
        Some(pose)
    }

    /// True while an arc is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The in-flight arc, if any.
    #[must_use]
    pub fn current(&self) -> Option<SwingArc> {
        self.in_flight.map(|f| f.arc)
    }

    /// Number of arcs that ran to completion.
    #[must_use]
    pub const fn completed(&self) -> u64 {
        self.completed
    }
}
