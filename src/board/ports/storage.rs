//! Durable key-value storage port backing board snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Single-key string storage, in the manner of browser local storage.
///
/// Implementations hold opaque serialized values; they never interpret the
/// snapshot format.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStorage {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] when the value does not fit or
    /// [`StorageError::Unavailable`] when the backing store rejects the
    /// write.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be used with this storage backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The value is larger than the storage quota allows.
    #[error("storage quota exceeded writing {key}: {required} bytes, limit {limit}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Bytes the write would occupy.
        required: usize,
        /// Configured byte limit.
        limit: usize,
    },

    /// The backing store failed.
    #[error("storage unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
