//! The capability the scheduler drives, and the source it learns membership from.

use std::sync::Arc;

use crate::util::ActorId;

/// A schedulable entity that can perform one timed action on command.
///
/// Implementations are owned by the host. The scheduler keeps only weak
/// references, so dropping the last `Arc` removes an actor from play even
/// before the next membership refresh.
pub trait Actor: Send + Sync {
    /// Stable identity, used as the key for availability tracking.
    fn id(&self) -> ActorId;

    /// Trigger the action. Must return immediately; any long-running effect
    /// is the actor's own concern.
    fn perform(&self, duration: f64);

    /// Whether the actor may currently be selected.
    fn is_live(&self) -> bool {
        true
    }
}

/// Shared handle to a host-owned actor.
pub type ActorHandle = Arc<dyn Actor>;

/// External membership source, e.g. a container whose children change over time.
pub trait MembershipSource {
    /// Current members in source-defined order.
    fn snapshot(&self) -> Vec<ActorHandle>;
}

impl MembershipSource for [ActorHandle] {
    fn snapshot(&self) -> Vec<ActorHandle> {
        self.to_vec()
    }
}

impl MembershipSource for Vec<ActorHandle> {
    fn snapshot(&self) -> Vec<ActorHandle> {
        self.clone()
    }
}
