//! Snapshot persistence behind an injected port.
//!
//! The store rewrites the whole snapshot on every mutation, so an adapter
//! only needs wholesale load and save. Concurrent writers are out of scope;
//! the last write wins.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::store::snapshot::Snapshot;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Where the snapshot lives. `load` distinguishes "nothing stored yet"
/// (`Ok(None)`) from a read that failed outright; callers treat both as
/// a reason to fall back to the demo dataset.
pub trait StoragePort {
    fn load(&self) -> Result<Option<Snapshot>, StorageError>;
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError>;
}

/// File adapter: the whole snapshot as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoragePort for JsonFileStorage {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }
}

/// In-memory adapter for tests and throwaway sessions. Serializes for real
/// so a load still exercises the full round trip.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    stored: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        match &self.stored {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        self.stored = Some(serde_json::to_string(snapshot)?);
        Ok(())
    }
}
