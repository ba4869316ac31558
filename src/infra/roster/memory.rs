//! In-memory roster whose members can change at any time.
//!
//! Every mutation sends a [`MembershipChanged`] signal to each subscriber over a
//! `crossbeam-channel`. The scheduler drains its receiver at the start of a tick,
//! so a refresh always completes before that tick's selection scan.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::{Mutex, RwLock};

use crate::core::{ActorHandle, MembershipChanged, MembershipSource};
use crate::util::ActorId;

/// Ordered, mutable collection of actors with change notification.
#[derive(Default)]
pub struct InMemoryRoster {
    members: RwLock<Vec<ActorHandle>>,
    subscribers: Mutex<Vec<Sender<MembershipChanged>>>,
}

impl InMemoryRoster {
    /// Empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster pre-filled with `members`.
    #[must_use]
    pub fn with_members(members: impl IntoIterator<Item = ActorHandle>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().collect()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Receive a signal on every membership change from now on.
    pub fn subscribe(&self) -> Receiver<MembershipChanged> {
        let (tx, rx) = unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Append a member. Adding an id that is already present is a no-op.
    pub fn add(&self, actor: ActorHandle) -> bool {
        {
            let mut members = self.members.write();
            if members.iter().any(|m| m.id() == actor.id()) {
                return false;
            }
            members.push(actor);
        }
        self.notify();
        true
    }

    /// Remove the member with `id`. Returns whether it was present.
    pub fn remove(&self, id: ActorId) -> bool {
        let removed = {
            let mut members = self.members.write();
            let before = members.len();
            members.retain(|m| m.id() != id);
            members.len() != before
        };
        if removed {
            self.notify();
        }
        removed
    }

    /// Remove every member.
    pub fn clear(&self) {
        self.members.write().clear();
        self.notify();
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    /// True when the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }

    fn notify(&self) {
        self.subscribers
            .lock()
            .retain(|tx| tx.send(MembershipChanged).is_ok());
    }
}

impl MembershipSource for InMemoryRoster {
    fn snapshot(&self) -> Vec<ActorHandle> {
        self.members.read().clone()
    }
}
