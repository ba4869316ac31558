//! Host integration: serialized ticking for concurrent hosts and a tokio driver.

pub mod shared;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_ticker;

pub use shared::SharedScheduler;
#[cfg(feature = "tokio-runtime")]
pub use tokio_ticker::TokioTicker;
