//! Named integer persistence
//!
//! The game only persists a handful of integers (the best score), so the
//! storage seam is a tiny key/value contract. Reads that find nothing, or
//! find garbage, are treated as absent by callers.
//!
//! Backends:
//! - `MemoryStore`: in-process map (tests, headless runs)
//! - `JsonFileStore`: flat JSON object on disk

pub mod file;
pub mod memory;

use std::fmt;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Read/write access to persisted integers
pub trait PersistentStore {
    /// Value stored under `key`, if any
    fn get_integer(&self, key: &str) -> Option<i64>;
    /// Store `value` under `key`, replacing any previous value
    fn set_integer(&mut self, key: &str, value: i64);
}

/// Failure reading or writing a file-backed store
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "storage I/O failed: {e}"),
            Self::Json(e) => write!(f, "storage data is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
