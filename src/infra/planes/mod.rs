//! Swing plane persistence.

pub mod file;

pub use file::{decode, encode, load, load_or_generate, save};
