//! In-memory key-value storage for tests and ephemeral boards.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStorage, StorageError, StorageResult};

/// Shared in-memory storage.
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what a board has written.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryStorage {
    /// Creates an empty storage with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty storage that rejects values longer than `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }

    /// Stores `value` under `key` directly, bypassing the quota.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the lock is poisoned.
    pub fn insert_raw(&self, key: &str, value: impl Into<String>) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| {
            StorageError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        entries.insert(key.to_owned(), value.into());
        Ok(())
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| {
            StorageError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.quota
            && value.len() > limit
        {
            return Err(StorageError::QuotaExceeded {
                key: key.to_owned(),
                required: value.len(),
                limit,
            });
        }
        self.insert_raw(key, value)
    }
}
