//! Per-actor busy windows.

use std::collections::{HashMap, HashSet};

use crate::util::{ActorId, Time};

/// Maps each tracked actor to the time it becomes free again.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityTracker {
    free_at: HashMap<ActorId, Time>,
}

impl AvailabilityTracker {
    /// Empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `freeAt <= now`. Untracked actors count as free.
    #[must_use]
    pub fn is_free(&self, actor: ActorId, now: Time) -> bool {
        self.free_at.get(&actor).is_none_or(|free_at| *free_at <= now)
    }

    /// Record that `actor` is busy until `until`. Untracked actors are
    /// ignored; entries only come into being through [`sync`](Self::sync).
    pub fn mark_busy(&mut self, actor: ActorId, until: Time) -> bool {
        match self.free_at.get_mut(&actor) {
            Some(slot) => {
                *slot = until;
                true
            }
            None => false,
        }
    }

    /// When `actor` becomes free, if tracked.
    #[must_use]
    pub fn free_at(&self, actor: ActorId) -> Option<Time> {
        self.free_at.get(&actor).copied()
    }

    /// Earliest instant at which any tracked actor is free.
    ///
    /// Returns `now` when nothing is tracked or somebody is already free, so the
    /// result is never in the past.
    #[must_use]
    pub fn soonest_free(&self, now: Time) -> Time {
        self.free_at
            .values()
            .copied()
            .min()
            .map_or(now, |earliest| earliest.max(now))
    }

    /// Align entries with the current membership: drop actors that left and
    /// insert newcomers as free at `now`. Returns `(added, removed)` counts.
    pub fn sync<I>(&mut self, live: I, now: Time) -> (usize, usize)
    where
        I: IntoIterator<Item = ActorId>,
    {
        let live: HashSet<ActorId> = live.into_iter().collect();
        let before = self.free_at.len();
        self.free_at.retain(|id, _| live.contains(id));
        let removed = before - self.free_at.len();

        let mut added = 0;
        for id in live {
            self.free_at.entry(id).or_insert_with(|| {
                added += 1;
                now
            });
        }
        (added, removed)
    }

    /// Number of tracked actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.free_at.len()
    }

    /// True when nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.free_at.is_empty()
    }
}
