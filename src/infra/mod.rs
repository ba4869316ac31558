//! Infrastructure adapters: membership sources and plane storage.

pub mod planes;
pub mod roster;

pub use roster::InMemoryRoster;
