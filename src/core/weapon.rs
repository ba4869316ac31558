//! Weapon dispatch and the attack handler actor.
//!
//! The weapon name is resolved once, when the handler is built, into an
//! [`AttackBinding`]. Dispatch on every attack is a match on that enum.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{StrategyConfig, SwingConfig};
use crate::core::actor::Actor;
use crate::core::motion::{SwingArc, SwingMotion, SwingPose};
use crate::core::planes::{rotate_about, DVec3, SwingPlanes, FORWARD, UP};
use crate::util::ActorId;

/// Closed set of weapon types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    /// Swinging blade.
    Katana,
    /// No attack implementation; attacks are logged and ignored.
    Unarmed,
}

impl FromStr for WeaponKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "katana" => Self::Katana,
            _ => Self::Unarmed,
        })
    }
}

/// How a katana picks the axis of its next swing.
#[derive(Debug, Clone)]
pub enum SwingStrategy {
    /// Uniformly random axis from a shared precomputed table.
    Efficient {
        /// Shared axis table.
        planes: Arc<SwingPlanes>,
    },
    /// Base axis `normal x aim`, tilted about `aim` by a random angle.
    Normal {
        /// Swing plane normal.
        normal: DVec3,
        /// Direction towards the target.
        aim: DVec3,
        /// Maximum tilt either way, in degrees.
        variation_offset: f64,
    },
}

impl SwingStrategy {
    /// Pick the axis for one swing.
    pub fn choose_axis<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<DVec3> {
        match self {
            Self::Efficient { planes } => planes.pick(rng),
            Self::Normal {
                normal,
                aim,
                variation_offset,
            } => {
                let normal = normal.try_normalize().unwrap_or(UP);
                let aim = aim.reject_from(normal).try_normalize()?;
                let base = normal.cross(aim).try_normalize()?;
                let tilt = if *variation_offset > 0.0 {
                    rng.random_range(-*variation_offset..=*variation_offset)
                } else {
                    0.0
                };
                rotate_about(base, aim, tilt).try_normalize()
            }
        }
    }
}

/// Attack implementation bound at construction time.
#[derive(Debug, Clone)]
pub enum AttackBinding {
    /// Start a swing arc chosen by the strategy.
    Swing(SwingStrategy),
    /// Log and do nothing.
    Unarmed,
}

struct HandlerState {
    motion: SwingMotion,
    rng: StdRng,
    attacks: u64,
}

/// Actor that turns scheduler dispatches into swing arcs.
///
/// The host advances the swing animation with [`AttackHandler::advance`] on its
/// own frame clock; `perform` only starts a new arc.
pub struct AttackHandler {
    id: ActorId,
    name: String,
    weapon_type: String,
    kind: WeaponKind,
    binding: AttackBinding,
    arc_degrees: f64,
    live: AtomicBool,
    state: Mutex<HandlerState>,
}

impl AttackHandler {
    /// Build a handler, resolving the weapon type against `config`.
    pub fn new(name: impl Into<String>, config: &SwingConfig, planes: Arc<SwingPlanes>) -> Self {
        Self::with_rng(name, config, planes, FORWARD, StdRng::from_os_rng())
    }

    /// Build a handler with a fixed aim direction and a seeded RNG.
    pub fn seeded(
        name: impl Into<String>,
        config: &SwingConfig,
        planes: Arc<SwingPlanes>,
        aim: DVec3,
        seed: u64,
    ) -> Self {
        Self::with_rng(name, config, planes, aim, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        name: impl Into<String>,
        config: &SwingConfig,
        planes: Arc<SwingPlanes>,
        aim: DVec3,
        rng: StdRng,
    ) -> Self {
        let config = config.sanitized();
        let kind = config
            .weapon_type
            .parse()
            .unwrap_or(WeaponKind::Unarmed);
        let binding = match kind {
            WeaponKind::Katana => AttackBinding::Swing(match config.strategy {
                StrategyConfig::Efficient => SwingStrategy::Efficient { planes },
                StrategyConfig::Normal => SwingStrategy::Normal {
                    normal: planes.normal(),
                    aim,
                    variation_offset: config.variation_offset,
                },
            }),
            WeaponKind::Unarmed => AttackBinding::Unarmed,
        };
        Self {
            id: ActorId::new(),
            name: name.into(),
            weapon_type: config.weapon_type,
            kind,
            binding,
            arc_degrees: config.arc_degrees,
            live: AtomicBool::new(true),
            state: Mutex::new(HandlerState {
                motion: SwingMotion::new(),
                rng,
                attacks: 0,
            }),
        }
    }

    /// Handler name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved weapon kind.
    #[must_use]
    pub const fn kind(&self) -> WeaponKind {
        self.kind
    }

    /// Bound attack implementation.
    #[must_use]
    pub const fn binding(&self) -> &AttackBinding {
        &self.binding
    }

    /// Enable or disable the handler; disabled handlers are skipped by the scheduler.
    pub fn set_live(&self, live: bool) {
        self.live.store(live, Ordering::Release);
    }

    /// Advance the current swing by `dt` seconds.
    pub fn advance(&self, dt: f64) -> Option<SwingPose> {
        self.state.lock().motion.advance(dt)
    }

    /// The swing in flight, if any.
    #[must_use]
    pub fn current_swing(&self) -> Option<SwingArc> {
        self.state.lock().motion.current()
    }

    /// Number of attacks received.
    #[must_use]
    pub fn attacks(&self) -> u64 {
        self.state.lock().attacks
    }
}

impl Actor for AttackHandler {
    fn id(&self) -> ActorId {
        self.id
    }

    fn perform(&self, duration: f64) {
        let mut state = self.state.lock();
        state.attacks += 1;
        match &self.binding {
            AttackBinding::Unarmed => {
                tracing::warn!(
                    handler = %self.name,
                    weapon = %self.weapon_type,
                    "no valid attack for weapon type"
                );
            }
            AttackBinding::Swing(strategy) => {
                let HandlerState { motion, rng, .. } = &mut *state;
                let Some(axis) = strategy.choose_axis(rng) else {
                    tracing::warn!(handler = %self.name, "no swing axis available");
                    return;
                };
                let replaced = motion.start(SwingArc {
                    axis,
                    arc_degrees: self.arc_degrees,
                    duration,
                });
                tracing::trace!(handler = %self.name, duration, replaced, "swing started");
            }
        }
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}
