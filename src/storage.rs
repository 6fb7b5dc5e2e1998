//! Storage
//!
//! The cart is persisted through a narrow key-value port so the engine never
//! talks to a concrete backend directly. Hosts inject whatever implements
//! [`StoragePort`]; tests use [`MemoryStorage`].

use std::{cell::RefCell, fs, io, path::PathBuf, rc::Rc};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors surfaced by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A string-keyed, string-valued storage backend.
///
/// All operations are synchronous; the engine is single-threaded and
/// event-driven. An absent key is `Ok(None)`, never an error, and removing
/// an absent key succeeds.
pub trait StoragePort {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend could not be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: FxHashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);

        Ok(())
    }
}

/// Directory-backed storage: one file per key, the key used verbatim as the
/// file name.
///
/// A missing file is an absent key. This backend gives separate processes a
/// shared cart, the way separate browser tabs share one storage area.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a backend rooted at `dir`. The directory is created lazily on
    /// first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Shared-handle backend: several owners in one process over one storage
/// area, the single-threaded analog of multiple tabs.
impl<S: StoragePort> StoragePort for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.borrow_mut().remove(key)
    }
}
