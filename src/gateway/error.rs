use std::fmt;

/// Error type for product gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request could not be sent or the response could not be read.
    Transport(String),
    /// The catalog answered with a non-success status.
    Status(u16),
    /// The response body was not valid product JSON.
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "catalog request failed: {}", msg),
            GatewayError::Status(status) => write!(f, "catalog responded with status {}", status),
            GatewayError::Decode(msg) => write!(f, "invalid catalog response: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}
