//! # Attack Orchestrator
//!
//! A cooldown-aware round-robin scheduler for timed actor actions.
//!
//! The scheduler repeatedly picks one member of a changing pool of actors and
//! tells it to act for a sampled duration. It guarantees that:
//!
//! - **No double booking**: an actor is never picked while still busy from its last action
//! - **Fairness**: over any run of pool-size selections, every actor gets the turn once
//! - **Backpressure**: the next decision is never scheduled before someone could be free
//! - **Pool safety**: members may join, leave, or go inactive at any time
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use attack_orchestrator::builders::SchedulerBuilder;
//! use attack_orchestrator::config::{OrchestratorConfig, SwingConfig};
//! use attack_orchestrator::core::{AttackHandler, SwingPlanes, TickOutcome};
//! use attack_orchestrator::infra::InMemoryRoster;
//! use attack_orchestrator::util::Time;
//!
//! let roster = Arc::new(InMemoryRoster::new());
//! for name in ["left", "right"] {
//!     roster.add(Arc::new(AttackHandler::new(name, &SwingConfig::default(), SwingPlanes::shared())));
//! }
//!
//! let mut scheduler = SchedulerBuilder::new(&OrchestratorConfig::default())
//!     .seed(7)
//!     .roster(&roster)
//!     .build();
//! scheduler.activate_attached(Time::ZERO);
//!
//! let outcome = scheduler.tick(Time::ZERO);
//! assert!(matches!(outcome, TickOutcome::Fired { .. }));
//! ```
//!
//! ## Driving from several threads
//!
//! Wrap the scheduler in [`runtime::SharedScheduler`] so ticks are serialized
//! through one mutex, or let [`runtime::TokioTicker`] tick it on an interval.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: actors, ordering, availability, and the tick loop.
pub mod core;
/// Configuration models for pacing and swing behaviour.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Infrastructure adapters for membership sources and plane storage.
pub mod infra;
/// Runtime adapters for concurrent and async hosts.
pub mod runtime;
/// Shared utilities: time, identity, telemetry.
pub mod util;
