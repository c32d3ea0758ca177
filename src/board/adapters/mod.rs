//! Storage adapters for board snapshots.

pub mod dir;
pub mod memory;
