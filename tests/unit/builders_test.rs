//! Tests for the scheduler builder

use std::sync::Arc;

use attack_orchestrator::builders::{build_scheduler, SchedulerBuilder};
use attack_orchestrator::config::OrchestratorConfig;
use attack_orchestrator::core::{Actor, SchedulerState, TickOutcome};
use attack_orchestrator::infra::InMemoryRoster;
use attack_orchestrator::util::{ActorId, Time};

struct Quiet(ActorId);

impl Actor for Quiet {
    fn id(&self) -> ActorId {
        self.0
    }

    fn perform(&self, _duration: f64) {}
}

fn quiet() -> Arc<Quiet> {
    Arc::new(Quiet(ActorId::new()))
}

#[test]
fn test_builder_clamps_config() {
    let cfg = OrchestratorConfig {
        interval_min: 0.0,
        interval_speed: -2.0,
        ..OrchestratorConfig::default()
    };
    let builder = SchedulerBuilder::new(&cfg).seed(3);
    assert_eq!(builder.config().interval_min, 0.01);
    assert_eq!(builder.config().interval_speed, 0.01);
    assert_eq!(builder.config().seed, Some(3));
}

#[test]
fn test_build_scheduler_starts_idle() {
    let mut sched = build_scheduler(&OrchestratorConfig::default());
    assert_eq!(sched.state(), SchedulerState::Idle);
    assert_eq!(sched.tick(Time::ZERO), TickOutcome::Idle);
}

#[test]
fn test_builder_from_json() {
    let builder = SchedulerBuilder::from_json_str(r#"{"interval_min": 2.0, "interval_max": 1.0}"#)
        .unwrap();
    assert_eq!(builder.config().interval_min, 1.0);
    assert_eq!(builder.config().interval_max, 2.0);
}

#[test]
fn test_roster_changes_reach_built_scheduler() {
    let roster = Arc::new(InMemoryRoster::new());
    let mut sched = SchedulerBuilder::new(&OrchestratorConfig::default())
        .seed(11)
        .roster(&roster)
        .build();

    sched.activate_attached(Time::ZERO);
    assert_eq!(sched.pool_len(), 0);
    assert_eq!(sched.tick(Time::ZERO), TickOutcome::Idle);

    let actor = quiet();
    roster.add(actor.clone());
    let outcome = sched.tick(Time::from_secs(0.1).unwrap());
    assert_eq!(sched.pool_len(), 1);
    assert_eq!(outcome.fired(), Some(actor.id()));
}

#[test]
fn test_same_seed_same_decisions() {
    let members: Vec<_> = (0..4).map(|_| quiet()).collect();
    let roster = Arc::new(InMemoryRoster::with_members(
        members.iter().map(|m| m.clone() as attack_orchestrator::core::ActorHandle),
    ));

    let run = |roster: &Arc<InMemoryRoster>| {
        let mut sched = SchedulerBuilder::new(&OrchestratorConfig::default())
            .seed(99)
            .roster(roster)
            .build();
        sched.activate_attached(Time::ZERO);
        let mut fired = Vec::new();
        for step in 0..200 {
            let now = Time::from_secs(f64::from(step) * 0.1).unwrap();
            if let Some(id) = sched.tick(now).fired() {
                fired.push((step, id));
            }
        }
        fired
    };

    let first = run(&roster);
    assert!(!first.is_empty());
    assert_eq!(first, run(&roster));
}
