//! Builder wiring configuration, membership, randomness, and auditing into a scheduler.

use std::sync::Arc;

use crossbeam_channel::Receiver;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::OrchestratorConfig;
use crate::core::{
    AuditSink, MembershipChanged, Scheduler, SchedulerError, SharedSource,
};
use crate::infra::InMemoryRoster;

/// Step-by-step construction of a [`Scheduler`].
pub struct SchedulerBuilder {
    config: OrchestratorConfig,
    source: Option<SharedSource>,
    signals: Option<Receiver<MembershipChanged>>,
    audit: Option<Box<dyn AuditSink>>,
}

impl SchedulerBuilder {
    /// Start from `config`; values are clamped.
    #[must_use]
    pub fn new(config: &OrchestratorConfig) -> Self {
        Self {
            config: config.sanitized(),
            source: None,
            signals: None,
            audit: None,
        }
    }

    /// Start from JSON configuration text.
    pub fn from_json_str(input: &str) -> Result<Self, SchedulerError> {
        OrchestratorConfig::from_json_str(input).map(|cfg| Self::new(&cfg))
    }

    /// Start from `ORCHESTRATOR_*` environment variables.
    pub fn from_env() -> Result<Self, SchedulerError> {
        OrchestratorConfig::from_env().map(|cfg| Self::new(&cfg))
    }

    /// Configuration the scheduler will be built with.
    #[must_use]
    pub const fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Override the RNG seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Attach a membership source without change notification.
    #[must_use]
    pub fn source(mut self, source: SharedSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Attach a roster and subscribe to its change signals.
    #[must_use]
    pub fn roster(mut self, roster: &Arc<InMemoryRoster>) -> Self {
        self.signals = Some(roster.subscribe());
        let source: SharedSource = Arc::clone(roster) as SharedSource;
        self.source = Some(source);
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Build the scheduler. It is idle until activated.
    #[must_use]
    pub fn build(self) -> Scheduler<StdRng> {
        let rng = self
            .config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut scheduler = Scheduler::new(&self.config, rng);
        if let Some(source) = self.source {
            scheduler = scheduler.with_source(source);
        }
        if let Some(signals) = self.signals {
            scheduler = scheduler.with_membership_signals(signals);
        }
        if let Some(audit) = self.audit {
            scheduler = scheduler.with_audit(audit);
        }
        scheduler
    }
}

/// Build a scheduler from configuration alone.
#[must_use]
pub fn build_scheduler(config: &OrchestratorConfig) -> Scheduler<StdRng> {
    SchedulerBuilder::new(config).build()
}
