//! Core scheduling abstractions: actors, fair ordering, availability, and the tick loop.

pub mod actor;
pub mod audit;
pub mod availability;
pub mod error;
pub mod fair_order;
pub mod motion;
pub mod planes;
pub mod pool;
pub mod scheduler;
pub mod weapon;

pub use actor::{Actor, ActorHandle, MembershipSource};
pub use audit::{
    build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink,
};
pub use availability::AvailabilityTracker;
pub use error::{AppResult, SchedulerError};
pub use fair_order::FairOrder;
pub use motion::{ease_in_out, SwingArc, SwingMotion, SwingPose};
pub use planes::{rotate_about, DVec3, SwingPlanes, FORWARD, UP};
pub use pool::{ActorPool, PoolDelta};
pub use scheduler::{
    MembershipChanged, Scheduler, SchedulerState, SharedSource, TickOutcome, DEFERRAL_EPSILON,
};
pub use weapon::{AttackBinding, AttackHandler, SwingStrategy, WeaponKind};
