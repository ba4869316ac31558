//! Scheduler pacing and ordering configuration.

use serde::{Deserialize, Serialize};

use crate::core::SchedulerError;

/// Floor applied to every interval, duration, and speed parameter.
pub const MIN_PARAMETER: f64 = 0.01;

const ENV_PREFIX: &str = "ORCHESTRATOR_";

/// Tunable scheduler parameters, in seconds.
///
/// These are design data rather than protocol input, so out-of-range values
/// are clamped by [`sanitized`](Self::sanitized) instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Shortest pause between two dispatches.
    pub interval_min: f64,
    /// Longest pause between two dispatches.
    pub interval_max: f64,
    /// Divisor applied to the sampled pause; higher is faster.
    pub interval_speed: f64,
    /// Shortest action duration handed to an actor.
    pub duration_min: f64,
    /// Longest action duration handed to an actor.
    pub duration_max: f64,
    /// Shuffle the turn order at the start of every cycle.
    pub randomize_order_each_cycle: bool,
    /// Fire on the first tick after activation instead of waiting one interval.
    pub fire_on_activate: bool,
    /// Seed for deterministic runs; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            interval_min: 0.5,
            interval_max: 1.5,
            interval_speed: 1.0,
            duration_min: 0.5,
            duration_max: 1.5,
            randomize_order_each_cycle: true,
            fire_on_activate: true,
            seed: None,
        }
    }
}

fn floor(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= MIN_PARAMETER {
        return value;
    }
    tracing::warn!("{name}={value} below floor, clamping to {MIN_PARAMETER}");
    MIN_PARAMETER
}

fn ordered(name: &str, min: f64, max: f64) -> (f64, f64) {
    if min > max {
        tracing::warn!("{name}: min {min} exceeds max {max}, swapping");
        (max, min)
    } else {
        (min, max)
    }
}

impl OrchestratorConfig {
    /// Report the first out-of-range parameter, for hosts that prefer to reject.
    pub fn validate(&self) -> Result<(), String> {
        let params = [
            ("interval_min", self.interval_min),
            ("interval_max", self.interval_max),
            ("interval_speed", self.interval_speed),
            ("duration_min", self.duration_min),
            ("duration_max", self.duration_max),
        ];
        for (name, value) in params {
            if !value.is_finite() || value < MIN_PARAMETER {
                return Err(format!("{name} must be at least {MIN_PARAMETER}, got {value}"));
            }
        }
        if self.interval_min > self.interval_max {
            return Err("interval_min must not exceed interval_max".into());
        }
        if self.duration_min > self.duration_max {
            return Err("duration_min must not exceed duration_max".into());
        }
        Ok(())
    }

    /// Copy with every parameter clamped to [`MIN_PARAMETER`] and min/max pairs ordered.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let (interval_min, interval_max) = ordered(
            "interval",
            floor("interval_min", self.interval_min),
            floor("interval_max", self.interval_max),
        );
        let (duration_min, duration_max) = ordered(
            "duration",
            floor("duration_min", self.duration_min),
            floor("duration_max", self.duration_max),
        );
        Self {
            interval_min,
            interval_max,
            interval_speed: floor("interval_speed", self.interval_speed),
            duration_min,
            duration_max,
            ..self.clone()
        }
    }

    /// Parse configuration from a JSON string. Missing fields take defaults.
    pub fn from_json_str(input: &str) -> Result<Self, SchedulerError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| SchedulerError::Config(format!("parse error: {e}")))?;
        Ok(cfg.sanitized())
    }

    /// Load configuration from `ORCHESTRATOR_*` environment variables, reading
    /// a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, SchedulerError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, starting from defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SchedulerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));
        let mut cfg = Self::default();

        let floats = [
            ("INTERVAL_MIN", &mut cfg.interval_min),
            ("INTERVAL_MAX", &mut cfg.interval_max),
            ("INTERVAL_SPEED", &mut cfg.interval_speed),
            ("DURATION_MIN", &mut cfg.duration_min),
            ("DURATION_MAX", &mut cfg.duration_max),
        ];
        for (suffix, slot) in floats {
            if let Some(raw) = get(suffix) {
                *slot = parse_value(suffix, &raw)?;
            }
        }
        if let Some(raw) = get("RANDOMIZE_ORDER") {
            cfg.randomize_order_each_cycle = parse_value("RANDOMIZE_ORDER", &raw)?;
        }
        if let Some(raw) = get("FIRE_ON_ACTIVATE") {
            cfg.fire_on_activate = parse_value("FIRE_ON_ACTIVATE", &raw)?;
        }
        if let Some(raw) = get("SEED") {
            cfg.seed = Some(parse_value("SEED", &raw)?);
        }
        Ok(cfg.sanitized())
    }
}

fn parse_value<T>(suffix: &str, raw: &str) -> Result<T, SchedulerError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| SchedulerError::Config(format!("{ENV_PREFIX}{suffix}={raw:?}: {e}")))
}
