//! Persistent storage for native targets, using `sled` as backend db.

use std::env;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;
use crate::error::Result;
use crate::storage::probe;
use crate::storage::StorageInterface;

/// Directory name of the default store location under `$HOME`.
pub const DEFAULT_STORAGE_DIR: &str = ".safe-storage";

/// Default location of the persistent store.
///
/// `$HOME/.safe-storage/data` when a home directory is available,
/// `./data/safe-storage` otherwise.
pub fn default_storage_path() -> PathBuf {
    match env::var_os("HOME").map(PathBuf::from) {
        Some(dir) => dir.join(DEFAULT_STORAGE_DIR).join("data"),
        None => Path::new("data").join("safe-storage"),
    }
}

/// Storage backed by a sled database. Values are stored as raw UTF-8
/// bytes, so a value read back is exactly the string written.
pub struct KvStorage {
    db: sled::Db,
    path: String,
}

impl KvStorage {
    /// New KvStorage
    /// * path: db file location
    pub fn new_with_path<P>(path: P) -> Result<Self>
    where P: AsRef<Path> {
        let db = sled::open(path.as_ref()).map_err(Error::Sled)?;
        Ok(Self {
            db,
            path: path.as_ref().to_string_lossy().to_string(),
        })
    }

    /// New KvStorage at [`default_storage_path`]
    pub fn new() -> Result<Self> {
        Self::new_with_path(default_storage_path())
    }

    /// Check whether a usable store can be opened at `path`.
    ///
    /// Opens the database and runs the write-then-delete probe against it.
    /// Any failure is reported as unusable, never propagated.
    pub fn can_use<P>(path: P) -> bool
    where P: AsRef<Path> {
        match Self::new_with_path(path) {
            Ok(storage) => probe(&storage),
            Err(_) => false,
        }
    }
}

impl StorageInterface for KvStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.db.get(key).map_err(Error::Sled)? {
            Some(v) => Ok(Some(String::from_utf8(v.to_vec())?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!("inserting key: {:?}", key);
        self.db.insert(key, value.as_bytes()).map_err(Error::Sled)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db.remove(key).map_err(Error::Sled)?;
        Ok(())
    }
}

impl std::fmt::Debug for KvStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStorage").field("path", &self.path).finish()
    }
}
