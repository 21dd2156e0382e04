//! JSON encoding of persisted values.

use serde::{de::DeserializeOwned, Serialize};

use super::{KeyValueStore, StoreError};

/// Load and decode the value stored under `key`.
///
/// A missing key yields `None`. A value that fails to decode is logged,
/// removed from the store, and also yields `None` so callers fall back to
/// their default state. Store read failures are logged and treated as absent.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read persisted value, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding corrupt persisted value");
            if let Err(e) = store.remove(key) {
                tracing::warn!(key, error = %e, "failed to remove corrupt persisted value");
            }
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`, replacing any previous value.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
