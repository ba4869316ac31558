//! Tokio-driven periodic ticking.

use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::runtime::SharedScheduler;

/// Drives a [`SharedScheduler`] from a `tokio::time::interval`.
#[derive(Clone)]
pub struct TokioTicker {
    handle: tokio::runtime::Handle,
    period: Duration,
}

impl TokioTicker {
    /// Ticker spawning onto `handle`, ticking every `period`.
    #[must_use]
    pub const fn new(handle: tokio::runtime::Handle, period: Duration) -> Self {
        Self { handle, period }
    }

    /// Ticker on the current runtime. Panics outside a tokio runtime.
    #[must_use]
    pub fn current(period: Duration) -> Self {
        Self::new(tokio::runtime::Handle::current(), period)
    }

    /// Tick until `shutdown` flips to true or its sender is dropped.
    /// The task resolves to the number of dispatches it made.
    pub fn spawn<R>(
        &self,
        scheduler: SharedScheduler<R>,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<u64>
    where
        R: Rng + Send + 'static,
    {
        let period = self.period.max(Duration::from_millis(1));
        self.handle.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut dispatched = 0u64;
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if scheduler.tick().fired().is_some() {
                            dispatched += 1;
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
            tracing::info!(dispatched, "ticker stopped");
            dispatched
        })
    }
}
