//! Tests for the in-memory roster

use std::sync::Arc;

use attack_orchestrator::core::{Actor, ActorHandle, MembershipSource};
use attack_orchestrator::infra::InMemoryRoster;
use attack_orchestrator::util::ActorId;

struct Quiet(ActorId);

impl Actor for Quiet {
    fn id(&self) -> ActorId {
        self.0
    }

    fn perform(&self, _duration: f64) {}
}

fn quiet() -> ActorHandle {
    Arc::new(Quiet(ActorId::new()))
}

#[test]
fn test_roster_add_remove() {
    let roster = InMemoryRoster::new();
    let a = quiet();
    let b = quiet();

    assert!(roster.add(a.clone()));
    assert!(roster.add(b.clone()));
    assert!(!roster.add(a.clone()));
    assert_eq!(roster.len(), 2);

    assert!(roster.remove(a.id()));
    assert!(!roster.remove(a.id()));
    let ids: Vec<_> = roster.snapshot().iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec![b.id()]);
}

#[test]
fn test_roster_signals_each_change() {
    let roster = InMemoryRoster::new();
    let rx = roster.subscribe();
    let a = quiet();

    roster.add(a.clone());
    roster.add(a.clone());
    roster.remove(a.id());
    roster.clear();

    assert_eq!(rx.try_iter().count(), 3);
}

#[test]
fn test_roster_drops_closed_subscribers() {
    let roster = InMemoryRoster::new();
    let kept = roster.subscribe();
    drop(roster.subscribe());

    roster.add(quiet());
    roster.add(quiet());
    assert_eq!(kept.try_iter().count(), 2);
}

#[test]
fn test_roster_snapshot_preserves_order() {
    let members: Vec<_> = (0..5).map(|_| quiet()).collect();
    let roster = InMemoryRoster::with_members(members.clone());
    let snap: Vec<_> = roster.snapshot().iter().map(|m| m.id()).collect();
    let want: Vec<_> = members.iter().map(|m| m.id()).collect();
    assert_eq!(snap, want);
}
