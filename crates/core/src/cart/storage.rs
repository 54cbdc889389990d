//! Cart storage seam.
//!
//! The cart persists into a string key-value slot, the analog of the
//! browser profile storage the original client wrote to. The seam exists so
//! tests can run against an in-memory fake, per the store's design.

use std::{
    collections::BTreeMap,
    fs, io,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use crate::cart::errors::CartStorageError;

/// Persistent string key-value slot backing a [`CartStore`].
///
/// Implementations are single-writer: one process owns the slot, and nothing
/// watches for external changes.
///
/// [`CartStore`]: crate::cart::store::CartStore
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying slot cannot be read at all.
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying slot cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), CartStorageError>;

    /// Remove `key` from the slot. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying slot cannot be written.
    fn remove(&self, key: &str) -> Result<(), CartStorageError>;
}

/// Key-value slot persisted as a single JSON object file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a slot backed by the file at `path`. The file is created on
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CartStorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(error) => return Err(CartStorageError::Read(error)),
        };

        serde_json::from_str(&raw)
            .map_err(|error| CartStorageError::Read(io::Error::new(io::ErrorKind::InvalidData, error)))
    }

    fn persist(&self, slots: &BTreeMap<String, String>) -> Result<(), CartStorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(CartStorageError::Write)?;
            }
        }

        let raw = serde_json::to_string(slots).map_err(CartStorageError::Serialize)?;

        fs::write(&self.path, raw).map_err(CartStorageError::Write)
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartStorageError> {
        let mut slots = self.load().unwrap_or_default();
        slots.insert(key.to_string(), value.to_string());

        self.persist(&slots)
    }

    fn remove(&self, key: &str) -> Result<(), CartStorageError> {
        let mut slots = self.load().unwrap_or_default();

        if slots.remove(key).is_none() {
            return Ok(());
        }

        self.persist(&slots)
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, CartStorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartStorageError> {
        self.lock().insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CartStorageError> {
        self.lock().remove(key);

        Ok(())
    }
}
