//! Error types for scheduler operations.

use thiserror::Error;

/// Errors produced at the scheduler's boundaries.
///
/// Nothing inside a tick returns an error: an empty pool or a pool where every
/// actor is busy is handled by deferral. These variants cover the inputs the
/// host hands in (clock readings, configuration text, plane files).
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A clock reading was negative or not finite.
    #[error("invalid time: {0}")]
    InvalidTime(f64),
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
    /// A swing plane file was malformed.
    #[error("plane store error: {0}")]
    PlaneStore(String),
    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
