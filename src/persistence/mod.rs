//! High score and preference persistence
//!
//! Features:
//! - Key/value [`Storage`] backends (LocalStorage on web, in-memory elsewhere)
//! - Versioned JSON save record
//! - Corruption detection: unreadable records surface as [`StorageError`] and
//!   the caller falls back to defaults

#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage key of the save record
pub const SAVE_KEY: &str = "flap_rush_save";
/// Storage key of the settings blob
pub const SETTINGS_KEY: &str = "flap_rush_settings";

/// Current save record version
pub const SAVE_VERSION: u32 = 1;

/// Storage failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No backend is reachable (private browsing, sandboxed iframe, ...)
    Unavailable,
    /// The backend rejected a read or write
    Backend(String),
    /// Stored data could not be parsed
    Corrupt(String),
    /// Record written by a newer build
    UnsupportedVersion(u32),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::Backend(msg) => write!(f, "storage backend error: {msg}"),
            Self::Corrupt(msg) => write!(f, "corrupt record: {msg}"),
            Self::UnsupportedVersion(v) => write!(f, "unsupported save version {v}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err.to_string())
    }
}

/// String key/value store
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store for native runs and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persisted progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub high_score: u32,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            high_score: 0,
        }
    }
}

/// Load the save record, `None` if nothing was ever saved
pub fn load_record(storage: &dyn Storage) -> Result<Option<SaveRecord>, StorageError> {
    let Some(json) = storage.get(SAVE_KEY)? else {
        return Ok(None);
    };
    let record: SaveRecord = serde_json::from_str(&json)?;
    if record.version > SAVE_VERSION {
        return Err(StorageError::UnsupportedVersion(record.version));
    }
    Ok(Some(record))
}

pub fn save_record(storage: &mut dyn Storage, record: &SaveRecord) -> Result<(), StorageError> {
    let json = serde_json::to_string(record)?;
    storage.set(SAVE_KEY, &json)
}

/// Stored high score, 0 when nothing was saved yet
pub fn load_high_score(storage: &dyn Storage) -> Result<u32, StorageError> {
    Ok(load_record(storage)?.map_or(0, |r| r.high_score))
}

pub fn save_high_score(storage: &mut dyn Storage, high_score: u32) -> Result<(), StorageError> {
    save_record(
        storage,
        &SaveRecord {
            version: SAVE_VERSION,
            high_score,
        },
    )
}
