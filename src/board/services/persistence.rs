//! Best-effort snapshot persistence.
//!
//! Reads never fail: anything missing, unreadable or malformed degrades to
//! the seed board. Writes never fail either; a rejected write is logged and
//! the in-memory state stays authoritative for the session.

use std::sync::Arc;

use tracing::{info, warn};

use super::record::{self, RecordError};
use crate::board::domain::Snapshot;
use crate::board::ports::KeyValueStorage;

/// Where a loaded snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOrigin {
    /// Decoded from the stored record.
    Stored {
        /// Malformed entries dropped while decoding.
        dropped: usize,
    },
    /// Replaced by the seed because nothing was stored.
    SeedEmpty,
    /// Replaced by the seed because the store could not be read; carries
    /// the storage error message.
    SeedUnavailable(String),
    /// Replaced by the seed because the stored record was malformed.
    SeedCorrupt(RecordError),
}

impl SnapshotOrigin {
    /// Returns `true` when the seed stood in for stored data.
    #[must_use]
    pub const fn is_seed(&self) -> bool {
        !matches!(self, Self::Stored { .. })
    }
}

/// A snapshot paired with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    /// The usable snapshot.
    pub snapshot: Snapshot,
    /// Where it came from.
    pub origin: SnapshotOrigin,
}

/// Reads and writes the board snapshot under a single storage key.
#[derive(Debug)]
pub struct SnapshotPersistence<S>
where
    S: KeyValueStorage,
{
    storage: Arc<S>,
    key: String,
}

impl<S> SnapshotPersistence<S>
where
    S: KeyValueStorage,
{
    /// Creates a persistence adapter for `key`.
    #[must_use]
    pub fn new(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the stored snapshot, falling back to [`Snapshot::seed`].
    #[must_use]
    pub fn load(&self) -> Snapshot {
        self.load_or_seed().snapshot
    }

    /// Loads the stored snapshot and reports whether the seed was used.
    #[must_use]
    pub fn load_or_seed(&self) -> LoadedSnapshot {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!(key = %self.key, "no stored board, using seed");
                return seeded(SnapshotOrigin::SeedEmpty);
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "storage read failed, using seed");
                return seeded(SnapshotOrigin::SeedUnavailable(err.to_string()));
            }
        };

        match record::decode(&raw) {
            Ok((snapshot, dropped)) => {
                if dropped > 0 {
                    warn!(key = %self.key, dropped, "dropped malformed task entries");
                }
                LoadedSnapshot {
                    snapshot,
                    origin: SnapshotOrigin::Stored { dropped },
                }
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "stored board is corrupt, using seed");
                seeded(SnapshotOrigin::SeedCorrupt(err))
            }
        }
    }

    /// Writes `snapshot`, logging and discarding any failure.
    ///
    /// Returns `true` when the write reached storage.
    pub fn save(&self, snapshot: &Snapshot) -> bool {
        let encoded = match record::encode(snapshot) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to encode board");
                return false;
            }
        };
        match self.storage.write(&self.key, &encoded) {
            Ok(()) => true,
            Err(err) => {
                warn!(key = %self.key, error = %err, "storage write failed");
                false
            }
        }
    }
}

fn seeded(origin: SnapshotOrigin) -> LoadedSnapshot {
    LoadedSnapshot {
        snapshot: Snapshot::seed(),
        origin,
    }
}
