//! Configuration models for pacing, ordering, and swing behaviour.

pub mod orchestrator;
pub mod swing;

pub use orchestrator::{OrchestratorConfig, MIN_PARAMETER};
pub use swing::{StrategyConfig, SwingConfig};
