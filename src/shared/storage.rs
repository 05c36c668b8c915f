//! Key-value stores backing the persisted view state

use std::collections::HashMap;

use crate::shared::errors::StorageError;

/// String keys, string values. `get` returns `Ok(None)` for absent keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, used for server rendering and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            read_only: false,
        }
    }

    /// Rejects every write, like a browser with a full or disabled storage
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// Storage may be missing (privacy mode, sandboxed iframe); every access
    /// then reports `Unavailable`.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is unavailable, sidebar state will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage is unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Store used by the running app: localStorage in the browser, memory elsewhere
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = MemoryStore;

#[cfg(target_arch = "wasm32")]
pub fn open_platform_store() -> PlatformStore {
    LocalStorageStore::open()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_platform_store() -> PlatformStore {
    MemoryStore::new()
}
