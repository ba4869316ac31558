//! Live actor list derived from an external membership source.

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use crate::core::actor::{Actor, ActorHandle, MembershipSource};
use crate::util::ActorId;

struct PoolEntry {
    id: ActorId,
    actor: Weak<dyn Actor>,
}

/// Membership change produced by a refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolDelta {
    /// Actors present now but not before.
    pub added: Vec<ActorId>,
    /// Actors present before but not now.
    pub removed: Vec<ActorId>,
}

impl PoolDelta {
    /// True when membership did not change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Ordered pool of actors, held by weak reference.
///
/// Indices are only meaningful between two refreshes.
#[derive(Default)]
pub struct ActorPool {
    members: Vec<PoolEntry>,
}

impl ActorPool {
    /// Empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive membership from `source`, in source order.
    ///
    /// Repeated ids collapse to their first occurrence.
    pub fn refresh<S>(&mut self, source: &S) -> PoolDelta
    where
        S: MembershipSource + ?Sized,
    {
        let previous: HashSet<ActorId> = self.members.iter().map(|m| m.id).collect();

        let mut seen = HashSet::new();
        self.members = source
            .snapshot()
            .iter()
            .filter(|actor| seen.insert(actor.id()))
            .map(|actor| PoolEntry {
                id: actor.id(),
                actor: Arc::downgrade(actor),
            })
            .collect();

        let added = self
            .members
            .iter()
            .map(|m| m.id)
            .filter(|id| !previous.contains(id))
            .collect();
        let mut removed: Vec<ActorId> = previous.difference(&seen).copied().collect();
        removed.sort_unstable();

        PoolDelta { added, removed }
    }

    /// Resolve the actor at `idx` if it still exists and reports itself live.
    #[must_use]
    pub fn live_at(&self, idx: usize) -> Option<(ActorId, ActorHandle)> {
        let entry = self.members.get(idx)?;
        let actor = entry.actor.upgrade()?;
        actor.is_live().then_some((entry.id, actor))
    }

    /// Identity of the member at `idx`.
    #[must_use]
    pub fn id_at(&self, idx: usize) -> Option<ActorId> {
        self.members.get(idx).map(|m| m.id)
    }

    /// Member identities in pool order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the pool has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
