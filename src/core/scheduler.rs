//! Cooldown-aware round-robin scheduler.
//!
//! One call to [`Scheduler::tick`] per logical time step. Each tick either does
//! nothing (pool empty, or not yet time), dispatches the next actor in fair
//! order that is free, or defers to the earliest moment someone could be free.

use std::sync::Arc;

use crossbeam_channel::Receiver;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{OrchestratorConfig, MIN_PARAMETER};
use crate::core::actor::{ActorHandle, MembershipSource};
use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::availability::AvailabilityTracker;
use crate::core::fair_order::FairOrder;
use crate::core::pool::{ActorPool, PoolDelta};
use crate::util::{ActorId, Time};

/// Minimum step applied when deferring, so a failed scan always moves time forward.
pub const DEFERRAL_EPSILON: f64 = 0.01;

/// Signal that the membership source has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipChanged;

/// Shared membership source the scheduler refreshes from on its own.
pub type SharedSource = Arc<dyn MembershipSource + Send + Sync>;

/// Coarse scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Pool is empty.
    Idle,
    /// Waiting for `now >= next_fire_at`.
    Armed,
    /// Selection in progress within a tick.
    Dispatching,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing to schedule.
    Idle,
    /// Not yet time to decide.
    Waiting {
        /// Next decision time.
        next_fire_at: Time,
    },
    /// An actor was dispatched.
    Fired {
        /// Dispatched actor.
        actor: ActorId,
        /// Duration handed to the actor.
        duration: f64,
        /// Next decision time.
        next_fire_at: Time,
    },
    /// Nobody was free; the decision was pushed back.
    Deferred {
        /// Next decision time.
        next_fire_at: Time,
    },
}

impl TickOutcome {
    /// The dispatched actor, if any.
    #[must_use]
    pub const fn fired(&self) -> Option<ActorId> {
        match self {
            Self::Fired { actor, .. } => Some(*actor),
            _ => None,
        }
    }
}

/// Round-robin scheduler over a dynamic actor pool.
pub struct Scheduler<R = StdRng> {
    config: OrchestratorConfig,
    pool: ActorPool,
    order: FairOrder,
    availability: AvailabilityTracker,
    paced_at: Time,
    next_fire_at: Time,
    state: SchedulerState,
    rng: R,
    source: Option<SharedSource>,
    signals: Option<Receiver<MembershipChanged>>,
    pending_refresh: bool,
    audit: Option<Box<dyn AuditSink>>,
}

impl<R: Rng> Scheduler<R> {
    /// Create an idle scheduler. The config is clamped before use.
    pub fn new(config: &OrchestratorConfig, rng: R) -> Self {
        Self {
            config: config.sanitized(),
            pool: ActorPool::new(),
            order: FairOrder::default(),
            availability: AvailabilityTracker::new(),
            paced_at: Time::ZERO,
            next_fire_at: Time::ZERO,
            state: SchedulerState::Idle,
            rng,
            source: None,
            signals: None,
            pending_refresh: false,
            audit: None,
        }
    }

    /// Attach a membership source used by [`activate_attached`](Self::activate_attached)
    /// and by signal-driven refreshes.
    #[must_use]
    pub fn with_source(mut self, source: SharedSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Listen for membership changes. Signals are drained at the start of each tick.
    #[must_use]
    pub fn with_membership_signals(mut self, signals: Receiver<MembershipChanged>) -> Self {
        self.signals = Some(signals);
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Replace the pacing configuration; takes effect from the next dispatch.
    pub fn set_config(&mut self, config: &OrchestratorConfig) {
        self.config = config.sanitized();
    }

    /// Current (clamped) configuration.
    #[must_use]
    pub const fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Populate the pool from `source` and arm the scheduler.
    pub fn activate<S>(&mut self, source: &S, now: Time)
    where
        S: MembershipSource + ?Sized,
    {
        self.refresh(source, now);
        self.arm(now);
    }

    /// Like [`activate`](Self::activate), using the attached source.
    pub fn activate_attached(&mut self, now: Time) {
        if let Some(source) = self.source.clone() {
            self.refresh(source.as_ref(), now);
        }
        self.arm(now);
    }

    fn arm(&mut self, now: Time) {
        let paced_at = if self.config.fire_on_activate {
            now
        } else {
            let interval = self.sample_interval();
            now.after(interval)
        };
        self.schedule(paced_at, now);
        self.state = if self.pool.is_empty() {
            SchedulerState::Idle
        } else {
            SchedulerState::Armed
        };
        tracing::info!(
            pool_size = self.pool.len(),
            next_fire_at = %self.next_fire_at,
            "scheduler activated"
        );
    }

    /// Mark the attached source as changed; the pool is rebuilt on the next tick.
    pub fn notify_membership_changed(&mut self) {
        self.pending_refresh = true;
    }

    /// Rebuild pool, turn order, and availability from `source`.
    pub fn refresh<S>(&mut self, source: &S, now: Time) -> PoolDelta
    where
        S: MembershipSource + ?Sized,
    {
        let delta = self.pool.refresh(source);
        self.order.rebuild(self.pool.len());
        self.order
            .reset(self.config.randomize_order_each_cycle, &mut self.rng);
        let (added, removed) = self.availability.sync(self.pool.ids(), now);

        if self.pool.is_empty() {
            self.state = SchedulerState::Idle;
        } else if self.state == SchedulerState::Idle {
            self.state = SchedulerState::Armed;
        }
        // Membership changes move the backpressure bound; the pacing target stays.
        self.next_fire_at = self.paced_at.max(self.availability.soonest_free(now));

        tracing::info!(pool_size = self.pool.len(), added, removed, "pool refreshed");
        self.record(build_audit_event(
            now,
            None,
            AuditAction::Refreshed {
                pool_size: self.pool.len(),
                added,
                removed,
            },
            None,
        ));
        delta
    }

    fn sync_membership(&mut self, now: Time) {
        if let Some(signals) = &self.signals {
            while signals.try_recv().is_ok() {
                self.pending_refresh = true;
            }
        }
        if !self.pending_refresh {
            return;
        }
        self.pending_refresh = false;
        if let Some(source) = self.source.clone() {
            self.refresh(source.as_ref(), now);
        }
    }

    /// Record that `actor` is busy until `until`, e.g. after an action the host
    /// triggered outside the scheduler. Returns `false`, changing nothing, when
    /// `actor` is not a pool member.
    pub fn mark_busy(&mut self, actor: ActorId, until: Time) -> bool {
        let tracked = self.availability.mark_busy(actor, until);
        if !tracked {
            tracing::debug!(%actor, "ignoring busy mark for non-member");
        }
        tracked
    }

    /// Evaluate the scheduler at `now`.
    pub fn tick(&mut self, now: Time) -> TickOutcome {
        self.sync_membership(now);

        if self.pool.is_empty() {
            self.state = SchedulerState::Idle;
            return TickOutcome::Idle;
        }
        self.state = SchedulerState::Armed;
        if now < self.next_fire_at {
            return TickOutcome::Waiting {
                next_fire_at: self.next_fire_at,
            };
        }

        self.state = SchedulerState::Dispatching;
        let outcome = match self.select_available(now) {
            None => {
                self.schedule(now.after(DEFERRAL_EPSILON), now);
                tracing::debug!(%now, next_fire_at = %self.next_fire_at, "no free actor, deferring");
                self.record(build_audit_event(
                    now,
                    None,
                    AuditAction::Deferred,
                    Some(self.next_fire_at),
                ));
                TickOutcome::Deferred {
                    next_fire_at: self.next_fire_at,
                }
            }
            Some((id, actor)) => {
                let duration = sample_between(
                    &mut self.rng,
                    self.config.duration_min,
                    self.config.duration_max,
                );
                actor.perform(duration);
                self.availability.mark_busy(id, now.after(duration));

                let interval = self.sample_interval();
                self.schedule(now.after(interval), now);
                tracing::debug!(
                    %now,
                    actor = %id,
                    duration,
                    next_fire_at = %self.next_fire_at,
                    "actor dispatched"
                );
                self.record(build_audit_event(
                    now,
                    Some(id),
                    AuditAction::Fired { duration },
                    Some(self.next_fire_at),
                ));
                TickOutcome::Fired {
                    actor: id,
                    duration,
                    next_fire_at: self.next_fire_at,
                }
            }
        };
        self.state = SchedulerState::Armed;
        outcome
    }

    /// Set the next decision time: the pacing target, but never before the
    /// first instant any actor could be free.
    fn schedule(&mut self, paced_at: Time, now: Time) {
        self.paced_at = paced_at;
        self.next_fire_at = paced_at.max(self.availability.soonest_free(now));
    }

    /// Walk the fair order for at most one pool's worth of indices and return
    /// the first live, free actor.
    ///
    /// A scan that wraps into a freshly shuffled cycle can spend its attempts on
    /// busy actors and miss a free one; the tick then defers by one epsilon.
    fn select_available(&mut self, now: Time) -> Option<(ActorId, ActorHandle)> {
        let mut attempts = 0;
        while attempts < self.order.len() {
            let Some(idx) = self.order.next() else {
                self.order
                    .reset(self.config.randomize_order_each_cycle, &mut self.rng);
                continue;
            };
            attempts += 1;

            let Some((id, actor)) = self.pool.live_at(idx) else {
                continue;
            };
            if self.availability.is_free(id, now) {
                return Some((id, actor));
            }
        }
        None
    }

    fn sample_interval(&mut self) -> f64 {
        let raw = sample_between(
            &mut self.rng,
            self.config.interval_min,
            self.config.interval_max,
        );
        (raw / self.config.interval_speed.max(MIN_PARAMETER)).max(MIN_PARAMETER)
    }

    fn record(&mut self, event: crate::core::AuditEvent) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(event);
        }
    }

    /// Coarse state after the last tick.
    #[must_use]
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Next decision time.
    #[must_use]
    pub const fn next_fire_at(&self) -> Time {
        self.next_fire_at
    }

    /// Number of pool members.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Member identities in pool order.
    pub fn pool_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.pool.ids()
    }

    /// When `actor` becomes free, if tracked.
    #[must_use]
    pub fn free_at(&self, actor: ActorId) -> Option<Time> {
        self.availability.free_at(actor)
    }

    /// Earliest instant any tracked actor is free.
    #[must_use]
    pub fn soonest_free(&self, now: Time) -> Time {
        self.availability.soonest_free(now)
    }

    /// Current turn order.
    #[must_use]
    pub const fn order(&self) -> &FairOrder {
        &self.order
    }
}

fn sample_between<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}
