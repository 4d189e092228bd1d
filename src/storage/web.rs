//! Storage for browser environments.
//!
//! Thin adapters over `window.localStorage` and `window.sessionStorage`.
//! Both platform stores raise on access when the user blocks cookies or
//! storage; the constructors and the `can_use` probes surface that as a
//! recoverable condition instead of an uncaught exception.

use crate::error::Error;
use crate::error::Result;
use crate::storage::probe;
use crate::storage::StorageInterface;

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(Error::WindowNotAvailable)
}

/// Adapter over the browser's persistent `localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Obtain `window.localStorage`. Accessing the store raises when the
    /// user blocks cookies; that failure surfaces here.
    pub fn new() -> Result<Self> {
        let storage = window()?
            .local_storage()
            .map_err(Error::WebSys)?
            .ok_or(Error::StorageNotAvailable)?;
        Ok(Self { storage })
    }

    /// Check whether `localStorage` accepts a write-then-delete of a
    /// random test key. Failures are reported as unusable, never
    /// propagated.
    pub fn can_use() -> bool {
        match Self::new() {
            Ok(storage) => probe(&storage),
            Err(_) => false,
        }
    }
}

impl StorageInterface for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(Error::WebSys)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(Error::WebSys)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(Error::WebSys)
    }
}

/// Adapter over the browser's session-scoped `sessionStorage`.
pub struct SessionStorage {
    storage: web_sys::Storage,
}

impl SessionStorage {
    /// Obtain `window.sessionStorage`. Accessing the store raises when the
    /// user blocks cookies; that failure surfaces here.
    pub fn new() -> Result<Self> {
        let storage = window()?
            .session_storage()
            .map_err(Error::WebSys)?
            .ok_or(Error::StorageNotAvailable)?;
        Ok(Self { storage })
    }

    /// Check whether `sessionStorage` accepts a write-then-delete of a
    /// random test key. Failures are reported as unusable, never
    /// propagated.
    pub fn can_use() -> bool {
        match Self::new() {
            Ok(storage) => probe(&storage),
            Err(_) => false,
        }
    }
}

impl StorageInterface for SessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(Error::WebSys)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(Error::WebSys)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(Error::WebSys)
    }
}
