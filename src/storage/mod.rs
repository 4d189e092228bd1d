//! Module of MemStorage and the platform storage backends.
//!
//! The factory functions in this module select a backend once, at
//! construction time. A platform store that passes the write-then-delete
//! [`probe`] is used directly; anything else falls back to [`MemStorage`].

#[cfg(all(feature = "std", not(feature = "wasm")))]
pub mod kv;
pub mod memory;
#[cfg(feature = "wasm")]
pub mod web;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::Result;
#[cfg(all(feature = "std", not(feature = "wasm")))]
pub use crate::storage::kv::KvStorage;
pub use crate::storage::memory::MemStorage;
#[cfg(feature = "wasm")]
pub use crate::storage::web::LocalStorage;
#[cfg(feature = "wasm")]
pub use crate::storage::web::SessionStorage;

/// Key value storage interface
pub trait StorageInterface {
    /// Get a stored value by `key`. A missing key is `Ok(None)`, never an
    /// error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Boxed storage backend selected by the factory functions.
#[cfg(feature = "wasm")]
pub type BoxedStorage = Box<dyn StorageInterface>;

/// Boxed storage backend selected by the factory functions.
#[cfg(not(feature = "wasm"))]
pub type BoxedStorage = Box<dyn StorageInterface + Send + Sync>;

const PROBE_KEY_SEGMENTS: usize = 4;
const PROBE_KEY_SEGMENT_LEN: usize = 8;
const PROBE_VALUE: &str = "test";

/// Generate a random key for [`probe`], long enough to not collide with
/// real application keys.
fn probe_key() -> String {
    let mut rng = rand::thread_rng();
    let mut key = String::with_capacity(PROBE_KEY_SEGMENTS * PROBE_KEY_SEGMENT_LEN);
    for _ in 0..PROBE_KEY_SEGMENTS {
        let segment: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(PROBE_KEY_SEGMENT_LEN)
            .map(char::from)
            .collect();
        key.push_str(&segment);
    }
    key
}

/// Write-then-delete liveness check against `storage`.
///
/// A read alone can succeed on a store that rejects writes, so the probe
/// writes a random test key and deletes it again; both operations must
/// complete. Failures are reported as `false`, never propagated. The test
/// key is removed on the success and the failure path alike.
pub fn probe(storage: &dyn StorageInterface) -> bool {
    let key = probe_key();
    let wrote = storage.set(&key, PROBE_VALUE).is_ok();
    // attempt cleanup even when the write failed
    let removed = storage.remove(&key).is_ok();
    wrote && removed
}

/// Create a storage backed by the browser's persistent `localStorage`,
/// falling back to [`MemStorage`] when it is blocked or unavailable.
#[cfg(feature = "wasm")]
pub fn generate_storage() -> BoxedStorage {
    match LocalStorage::new() {
        Ok(storage) if probe(&storage) => Box::new(storage),
        _ => {
            tracing::warn!("localStorage is not usable, falling back to in-memory storage");
            Box::new(MemStorage::new())
        }
    }
}

/// Create a storage backed by the browser's session-scoped
/// `sessionStorage`, falling back to [`MemStorage`] when it is blocked or
/// unavailable.
#[cfg(feature = "wasm")]
pub fn generate_session_storage() -> BoxedStorage {
    match SessionStorage::new() {
        Ok(storage) if probe(&storage) => Box::new(storage),
        _ => {
            tracing::warn!("sessionStorage is not usable, falling back to in-memory storage");
            Box::new(MemStorage::new())
        }
    }
}

/// Create a storage backed by a persistent [`KvStorage`] at
/// [`kv::default_storage_path`], falling back to [`MemStorage`] when the
/// store cannot be opened or fails the probe.
#[cfg(all(feature = "std", not(feature = "wasm")))]
pub fn generate_storage() -> BoxedStorage {
    generate_storage_with_path(kv::default_storage_path())
}

/// Same as [`generate_storage`], with an explicit store location.
#[cfg(all(feature = "std", not(feature = "wasm")))]
pub fn generate_storage_with_path<P>(path: P) -> BoxedStorage
where P: AsRef<std::path::Path> {
    match KvStorage::new_with_path(path.as_ref()) {
        Ok(storage) if probe(&storage) => Box::new(storage),
        _ => {
            tracing::warn!(
                "persistent storage at {:?} is not usable, falling back to in-memory storage",
                path.as_ref()
            );
            Box::new(MemStorage::new())
        }
    }
}

/// Create a session-scoped storage.
///
/// There is no session-scoped platform store outside the browser; the
/// returned [`MemStorage`] has the same lifetime semantics as a browser
/// session.
#[cfg(not(feature = "wasm"))]
pub fn generate_session_storage() -> BoxedStorage {
    Box::new(MemStorage::new())
}

/// Fallback-aware persistent and session storage handles for one process.
///
/// Meant to be constructed once by the application's composition root and
/// passed to consumers. The capability probes run at construction time
/// only; if platform storage availability changes later, construct a new
/// pair to pick up the change.
pub struct SafeStorage {
    local: BoxedStorage,
    session: BoxedStorage,
}

#[cfg(any(feature = "wasm", feature = "std"))]
impl SafeStorage {
    /// Probe the platform stores and build both handles.
    pub fn generate() -> Self {
        Self {
            local: generate_storage(),
            session: generate_session_storage(),
        }
    }

    /// Same as [`SafeStorage::generate`], with an explicit location for
    /// the persistent store.
    #[cfg(all(feature = "std", not(feature = "wasm")))]
    pub fn generate_with_path<P>(path: P) -> Self
    where P: AsRef<std::path::Path> {
        Self {
            local: generate_storage_with_path(path),
            session: generate_session_storage(),
        }
    }
}

impl SafeStorage {
    /// The persistent storage handle.
    pub fn local(&self) -> &dyn StorageInterface {
        self.local.as_ref()
    }

    /// The session-scoped storage handle.
    pub fn session(&self) -> &dyn StorageInterface {
        self.session.as_ref()
    }
}
