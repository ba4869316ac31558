//! Shared table of precomputed swing axes.
//!
//! The table is immutable once built. [`SwingPlanes::shared`] hands out one
//! lazily generated copy; handlers receive it as an `Arc` at construction.

use std::sync::{Arc, OnceLock};

use glam::DQuat;
pub use glam::DVec3;
use rand::Rng;

/// World up.
pub const UP: DVec3 = DVec3::Y;
/// World forward.
pub const FORWARD: DVec3 = DVec3::Z;

/// Rotate `v` about the unit `axis` by `degrees`.
#[must_use]
pub fn rotate_about(v: DVec3, axis: DVec3, degrees: f64) -> DVec3 {
    DQuat::from_axis_angle(axis, degrees.to_radians()) * v
}

/// Default angular step of the shared table, in degrees.
pub const DEFAULT_STEP_DEGREES: f64 = 5.0;

/// A shared plane normal plus the swing axes available around it.
#[derive(Debug, Clone, PartialEq)]
pub struct SwingPlanes {
    normal: DVec3,
    axes: Vec<DVec3>,
}

impl SwingPlanes {
    /// Build a table, normalizing the inputs. Degenerate axes are dropped and
    /// a degenerate normal falls back to [`UP`].
    #[must_use]
    pub fn new(normal: DVec3, axes: impl IntoIterator<Item = DVec3>) -> Self {
        Self {
            normal: normal.try_normalize().unwrap_or(UP),
            axes: axes.into_iter().filter_map(DVec3::try_normalize).collect(),
        }
    }

    /// Sweep the base axis `normal x aim` around `aim` in `step_degrees`
    /// increments over one full turn. Steps below one degree are raised to one.
    #[must_use]
    pub fn generate(normal: DVec3, aim: DVec3, step_degrees: f64) -> Self {
        let normal = normal.try_normalize().unwrap_or(UP);
        let aim = aim.reject_from(normal).try_normalize().unwrap_or(FORWARD);
        let base = normal.cross(aim).try_normalize().unwrap_or(DVec3::X);

        let step = if step_degrees.is_finite() {
            step_degrees.max(1.0)
        } else {
            DEFAULT_STEP_DEGREES
        };
        let axes = (0u32..)
            .map(|k| f64::from(k) * step)
            .take_while(|angle| *angle < 360.0)
            .map(|angle| rotate_about(base, aim, angle));
        Self::new(normal, axes)
    }

    /// Process-wide default table, generated on first use.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<SwingPlanes>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| {
            Arc::new(Self::generate(UP, FORWARD, DEFAULT_STEP_DEGREES))
        }))
    }

    /// Shared plane normal.
    #[must_use]
    pub const fn normal(&self) -> DVec3 {
        self.normal
    }

    /// All swing axes.
    #[must_use]
    pub fn axes(&self) -> &[DVec3] {
        &self.axes
    }

    /// Number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// True when the table has no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Uniformly random axis, or `None` for an empty table.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<DVec3> {
        if self.axes.is_empty() {
            return None;
        }
        self.axes.get(rng.random_range(0..self.axes.len())).copied()
    }
}
