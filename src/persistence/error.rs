use std::fmt;

/// Error type for key/value store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The key contains characters the backend cannot represent.
    InvalidKey(String),
    /// Underlying I/O failure.
    Io(String),
    /// A lock guarding shared storage was poisoned.
    LockPoisoned(&'static str),
    /// Serialization/deserialization error.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidKey(key) => write!(f, "invalid storage key: {:?}", key),
            StoreError::Io(msg) => write!(f, "storage I/O error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StoreError::Serde(msg) => write!(f, "storage serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
