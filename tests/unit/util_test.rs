//! Tests for utility types

use attack_orchestrator::util::{ActorId, Clock, ManualClock, Time};

#[test]
fn test_time_ordering() {
    let a = Time::from_secs(1.0).unwrap();
    let b = Time::from_secs(2.5).unwrap();
    assert!(a < b);
    assert_eq!(a.max(b), b);
    assert_eq!(a.after(1.5), b);
}

#[test]
fn test_time_rejects_invalid_clock_values() {
    assert!(Time::from_secs(-0.001).is_err());
    assert!(Time::from_secs(f64::NEG_INFINITY).is_err());
}

#[test]
fn test_manual_clock_advances() {
    let clock = ManualClock::new(Time::ZERO);
    clock.advance(0.25).unwrap();
    clock.advance(0.25).unwrap();
    assert_eq!(clock.now(), Time::from_secs(0.5).unwrap());
}

#[test]
fn test_actor_id_display_is_uuid() {
    let id = ActorId::new();
    assert_eq!(id.to_string(), id.as_uuid().to_string());
}

#[test]
fn test_init_tracing_is_idempotent() {
    attack_orchestrator::util::init_tracing();
    attack_orchestrator::util::init_tracing();
    tracing::info!("tracing initialised twice without panicking");
}
