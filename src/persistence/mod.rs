//! Persistence - durable key/value storage for session state.
//!
//! Every persisted value is a JSON string stored under a well-known key.
//! A missing key is a normal state and means "use the default".
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{InMemoryKeyValueStore, KeyValueStore, keys};
//!
//! let store = InMemoryKeyValueStore::new();
//! store.set(keys::THEME, "\"dark\"")?;
//! assert_eq!(store.get(keys::THEME)?.as_deref(), Some("\"dark\""));
//! ```

mod error;
mod file;
mod in_memory;
mod json;
mod session;

pub use error::StoreError;
pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
pub use json::{load_json, save_json};
pub use session::SessionStore;

/// Well-known keys used by the storefront components.
pub mod keys {
    /// Cart ledger entries (JSON array of products).
    pub const CART: &str = "cart";
    /// Resolved theme (`"light"` or `"dark"`).
    pub const THEME: &str = "theme";
}

/// String-valued key/value storage shared by the stateful components.
///
/// Writes are whole-value replacements, so independent components can share one
/// store as long as they use distinct keys. Implementations are expected to be
/// cheap to clone, with clones sharing the same underlying storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;
}
