//! Board configuration.
//!
//! Values come from defaults, then `PLACARD_*` environment variables, then
//! explicit overrides from the caller (command-line flags).

use std::env;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

use crate::board::adapters::dir::is_valid_key;

/// Environment variable naming the snapshot directory.
pub const DATA_DIR_ENV: &str = "PLACARD_DATA_DIR";
/// Environment variable naming the storage key.
pub const STORAGE_KEY_ENV: &str = "PLACARD_STORAGE_KEY";
/// Default snapshot directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".placard";
/// Default storage key, shared with boards saved by earlier releases.
pub const DEFAULT_STORAGE_KEY: &str = "kanban_editorial_v1";

/// Errors returned while building a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// A variable was not valid UTF-8.
    #[error("{0} must be valid UTF-8")]
    NotUnicode(&'static str),

    /// The storage key cannot name a single file.
    #[error("invalid storage key '{0}', expected letters, digits, '_', '-' or '.'")]
    InvalidStorageKey(String),
}

/// Where and under which key the board snapshot lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    data_dir: Utf8PathBuf,
    storage_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl BoardConfig {
    /// Builds a configuration from defaults and `PLACARD_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is empty, not UTF-8, or names
    /// an unusable storage key.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(data_dir) = read_var(DATA_DIR_ENV)? {
            config.data_dir = Utf8PathBuf::from(data_dir);
        }
        if let Some(storage_key) = read_var(STORAGE_KEY_ENV)? {
            config = config.with_storage_key(storage_key)?;
        }
        Ok(config)
    }

    /// Overrides the snapshot directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Overrides the storage key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStorageKey`] when the key cannot name a
    /// single file.
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = storage_key.into();
        if !is_valid_key(&key) {
            return Err(ConfigError::InvalidStorageKey(key));
        }
        self.storage_key = key;
        Ok(self)
    }

    /// Returns the snapshot directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the storage key.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

fn read_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}
