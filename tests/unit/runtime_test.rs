//! Tests for the shared runtime handle

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use attack_orchestrator::builders::SchedulerBuilder;
use attack_orchestrator::config::OrchestratorConfig;
use attack_orchestrator::core::{Actor, TickOutcome};
use attack_orchestrator::infra::InMemoryRoster;
use attack_orchestrator::runtime::SharedScheduler;
use attack_orchestrator::util::{ActorId, ManualClock, Time};

struct Counter {
    id: ActorId,
    hits: AtomicUsize,
}

impl Actor for Counter {
    fn id(&self) -> ActorId {
        self.id
    }

    fn perform(&self, _duration: f64) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_shared_scheduler_follows_clock() {
    let actor = Arc::new(Counter {
        id: ActorId::new(),
        hits: AtomicUsize::new(0),
    });
    let roster = Arc::new(InMemoryRoster::new());
    roster.add(actor.clone());

    let cfg = OrchestratorConfig {
        interval_min: 1.0,
        interval_max: 1.0,
        duration_min: 0.5,
        duration_max: 0.5,
        ..OrchestratorConfig::default()
    };
    let clock = Arc::new(ManualClock::new(Time::ZERO));
    let shared = SharedScheduler::new(
        SchedulerBuilder::new(&cfg).seed(5).roster(&roster).build(),
        clock.clone(),
    );
    shared.activate();

    assert_eq!(shared.tick().fired(), Some(actor.id()));
    clock.advance(0.5).unwrap();
    assert!(matches!(shared.tick(), TickOutcome::Waiting { .. }));
    clock.advance(0.5).unwrap();
    assert_eq!(shared.tick().fired(), Some(actor.id()));
    assert_eq!(actor.hits.load(Ordering::SeqCst), 2);
    assert_eq!(shared.now(), Time::from_secs(1.0).unwrap());
}

#[test]
fn test_shared_scheduler_with_exposes_state() {
    let clock = Arc::new(ManualClock::new(Time::ZERO));
    let shared = SharedScheduler::new(
        SchedulerBuilder::new(&OrchestratorConfig::default()).seed(1).build(),
        clock,
    );
    shared.activate();
    assert_eq!(shared.with(|s| s.pool_len()), 0);
    assert_eq!(shared.tick(), TickOutcome::Idle);
}
