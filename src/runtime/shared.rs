//! Mutex-guarded scheduler handle for hosts that tick from more than one thread.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{Scheduler, TickOutcome};
use crate::util::{Clock, Time};

/// Cloneable handle that serializes every tick through one mutex and reads
/// `now` from a shared clock.
pub struct SharedScheduler<R = StdRng> {
    inner: Arc<Mutex<Scheduler<R>>>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for SharedScheduler<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: Rng> SharedScheduler<R> {
    /// Wrap `scheduler`, driving it from `clock`.
    pub fn new(scheduler: Scheduler<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
            clock,
        }
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Time {
        self.clock.now()
    }

    /// Activate using the scheduler's attached source.
    pub fn activate(&self) {
        let now = self.clock.now();
        self.inner.lock().activate_attached(now);
    }

    /// Tick at the clock's current time.
    pub fn tick(&self) -> TickOutcome {
        let now = self.clock.now();
        self.inner.lock().tick(now)
    }

    /// Request a membership refresh on the next tick.
    pub fn notify_membership_changed(&self) {
        self.inner.lock().notify_membership_changed();
    }

    /// Run `f` with exclusive access to the scheduler.
    pub fn with<T>(&self, f: impl FnOnce(&mut Scheduler<R>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
