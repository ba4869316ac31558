//! Tests for audit sinks

use std::sync::Arc;

use attack_orchestrator::core::{
    build_audit_event, Actor, ActorHandle, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink,
    Scheduler,
};
use attack_orchestrator::config::OrchestratorConfig;
use attack_orchestrator::util::{ActorId, Time};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Quiet(ActorId);

impl Actor for Quiet {
    fn id(&self) -> ActorId {
        self.0
    }

    fn perform(&self, _duration: f64) {}
}

struct SharedSink(Arc<Mutex<InMemoryAuditSink>>);

impl AuditSink for SharedSink {
    fn record(&mut self, event: AuditEvent) {
        self.0.lock().record(event);
    }
}

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);
    let id = ActorId::new();
    sink.record(build_audit_event(
        Time::ZERO,
        Some(id),
        AuditAction::Fired { duration: 1.0 },
        Some(Time::from_secs(0.5).unwrap()),
    ));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].actor, Some(id));
    assert_eq!(sink.fired(), vec![(Time::ZERO, id)]);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);
    for secs in [1.0, 2.0, 3.0] {
        let at = Time::from_secs(secs).unwrap();
        sink.record(build_audit_event(at, None, AuditAction::Deferred, None));
    }

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].at, Time::from_secs(2.0).unwrap());
    assert_eq!(events[1].at, Time::from_secs(3.0).unwrap());
}

#[test]
fn test_scheduler_records_refresh_fire_and_deferral() {
    let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(16)));
    let actor = Arc::new(Quiet(ActorId::new()));
    let members: Vec<ActorHandle> = vec![actor.clone()];
    let cfg = OrchestratorConfig {
        interval_min: 0.1,
        interval_max: 0.1,
        duration_min: 2.0,
        duration_max: 2.0,
        ..OrchestratorConfig::default()
    };

    let mut sched = Scheduler::new(&cfg, StdRng::seed_from_u64(1))
        .with_audit(Box::new(SharedSink(Arc::clone(&sink))));
    sched.activate(&members, Time::ZERO);
    sched.tick(Time::ZERO);
    sched.mark_busy(actor.id(), Time::from_secs(9.0).unwrap());
    sched.tick(Time::from_secs(2.0).unwrap());

    let events = sink.lock().events();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        events[0].action,
        AuditAction::Refreshed { pool_size: 1, added: 1, removed: 0 }
    ));
    assert_eq!(events[1].action, AuditAction::Fired { duration: 2.0 });
    assert_eq!(events[2].action, AuditAction::Deferred);
    assert_eq!(events[2].next_fire_at, Some(Time::from_secs(9.0).unwrap()));
}
