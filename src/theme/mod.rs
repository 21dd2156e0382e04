//! Theme preference - light/dark state persisted across sessions.
//!
//! The host environment is reached through [`ColorSchemeHost`]: it reports
//! the system color-scheme preference and receives every resolved theme so
//! it can update its root-level styling synchronously.

mod host;
mod preference;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use host::{ColorSchemeHost, FixedColorScheme};
pub use preference::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme name other than `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeError {
    value: String,
}

impl ParseThemeError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {:?}", self.value)
    }
}

impl std::error::Error for ParseThemeError {}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError {
                value: s.to_string(),
            }),
        }
    }
}
