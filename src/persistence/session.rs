use std::path::PathBuf;

use super::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StoreError};

/// The store a configured session uses: on disk when a storage directory is
/// configured, in memory otherwise.
#[derive(Debug, Clone)]
pub enum SessionStore {
    Memory(InMemoryKeyValueStore),
    File(FileKeyValueStore),
}

impl SessionStore {
    pub fn open(storage_dir: Option<PathBuf>) -> Self {
        match storage_dir {
            Some(dir) => SessionStore::File(FileKeyValueStore::new(dir)),
            None => SessionStore::Memory(InMemoryKeyValueStore::new()),
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, SessionStore::File(_))
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            SessionStore::Memory(store) => store.get(key),
            SessionStore::File(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            SessionStore::Memory(store) => store.set(key, value),
            SessionStore::File(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        match self {
            SessionStore::Memory(store) => store.remove(key),
            SessionStore::File(store) => store.remove(key),
        }
    }
}
