//! Membership sources.

pub mod memory;

pub use memory::InMemoryRoster;
