//! Audit sink implementations.
//!
//! Records every scheduling decision so hosts and tests can replay what the
//! scheduler did and when.

use std::collections::VecDeque;

use crate::util::{ActorId, Time};

/// What happened on a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuditAction {
    /// Membership was re-derived.
    Refreshed {
        /// Members after the refresh.
        pool_size: usize,
        /// Newly present actors.
        added: usize,
        /// Actors no longer present.
        removed: usize,
    },
    /// An actor was dispatched.
    Fired {
        /// Sampled action duration.
        duration: f64,
    },
    /// No eligible actor; the decision was pushed back.
    Deferred,
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    /// Tick time.
    pub at: Time,
    /// Dispatched actor, if any.
    pub actor: Option<ActorId>,
    /// Decision taken.
    pub action: AuditAction,
    /// Next decision time after this event.
    pub next_fire_at: Option<Time>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Actors dispatched so far, oldest first.
    #[must_use]
    pub fn fired(&self) -> Vec<(Time, ActorId)> {
        self.events
            .iter()
            .filter(|e| matches!(e.action, AuditAction::Fired { .. }))
            .filter_map(|e| e.actor.map(|a| (e.at, a)))
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Sink that forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::debug!(
            at = %event.at,
            actor = ?event.actor,
            action = ?event.action,
            next_fire_at = ?event.next_fire_at,
            "audit"
        );
    }
}

/// Helper to build an audit event from context.
#[must_use]
pub const fn build_audit_event(
    at: Time,
    actor: Option<ActorId>,
    action: AuditAction,
    next_fire_at: Option<Time>,
) -> AuditEvent {
    AuditEvent {
        at,
        actor,
        action,
        next_fire_at,
    }
}
