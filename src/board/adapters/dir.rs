//! Directory-backed key-value storage.
//!
//! Each key maps to `<key>.json` inside a single capability-scoped
//! directory. Writes go to a temporary sibling first and are renamed over
//! the target so a crash never leaves a half-written snapshot behind.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::board::ports::{KeyValueStorage, StorageError, StorageResult};

const VALUE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value storage rooted in one directory.
#[derive(Debug)]
pub struct DirStorage {
    dir: Dir,
}

impl DirStorage {
    /// Opens `path` as the storage root, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        let authority = ambient_authority();
        Dir::create_ambient_dir_all(path, authority).map_err(StorageError::unavailable)?;
        let dir = Dir::open_ambient_dir(path, authority).map_err(StorageError::unavailable)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Returns `true` when `key` is a single non-hidden file-name segment.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
}

fn value_file_name(key: &str) -> StorageResult<String> {
    if !is_valid_key(key) {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

impl KeyValueStorage for DirStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let file_name = value_file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::unavailable(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let file_name = value_file_name(key)?;
        let temp_name = format!("{file_name}.{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(StorageError::unavailable)?;
        self.dir
            .rename(&temp_name, &self.dir, &file_name)
            .map_err(StorageError::unavailable)
    }
}
