//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod storage;

pub use storage::{KeyValueStorage, StorageError, StorageResult};

#[cfg(test)]
pub use storage::MockKeyValueStorage;
