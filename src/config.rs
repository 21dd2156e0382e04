//! Session configuration.
//!
//! Values come from a JSON document and/or `STOREFRONT_*` environment
//! variables; anything unset takes the default.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

pub const ENV_CATALOG_URL: &str = "STOREFRONT_CATALOG_URL";
pub const ENV_DEBUG: &str = "STOREFRONT_DEBUG";
pub const ENV_STORAGE_DIR: &str = "STOREFRONT_STORAGE_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the product catalog service, without a trailing `/`.
    pub catalog_base_url: String,
    /// Verbose logging of catalog traffic and state changes.
    pub debug: bool,
    /// Directory for durable state. `None` keeps state in memory only.
    pub storage_dir: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            catalog_base_url: DEFAULT_CATALOG_URL.to_string(),
            debug: false,
            storage_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    Parse(String),
    /// A setting has a value that cannot be used.
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {}", msg),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl StorefrontConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StorefrontConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        StorefrontConfig::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `STOREFRONT_*` overrides resolved through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_CATALOG_URL) {
            self.catalog_base_url = url;
        }
        if let Some(flag) = lookup(ENV_DEBUG) {
            self.debug = parse_flag(ENV_DEBUG, &flag)?;
        }
        if let Some(dir) = lookup(ENV_STORAGE_DIR) {
            self.storage_dir = if dir.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.catalog_base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "catalog_base_url".into(),
                value: self.catalog_base_url,
            });
        }
        self.catalog_base_url = url.to_string();
        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
