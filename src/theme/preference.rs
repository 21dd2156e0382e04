use crate::persistence::{keys, save_json, KeyValueStore};

use super::{ColorSchemeHost, Theme};

pub struct ThemePreference<S: KeyValueStore, H: ColorSchemeHost> {
    theme: Theme,
    store: S,
    host: H,
}

impl<S: KeyValueStore, H: ColorSchemeHost> ThemePreference<S, H> {
    /// Load the persisted theme, falling back to the host's system
    /// preference (which is then persisted) when nothing usable is stored.
    pub fn load(store: S, host: H) -> Self {
        let (theme, from_store) = match read_persisted(&store) {
            Some(theme) => (theme, true),
            None => (Theme::from_prefers_dark(host.prefers_dark()), false),
        };
        if !from_store {
            persist(&store, theme);
        }
        host.apply_theme(theme);
        tracing::debug!(theme = %theme, from_store, "theme loaded");
        ThemePreference { theme, store, host }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }

    /// Adopt the host's current system preference.
    ///
    /// Returns true if the theme changed.
    pub fn resolve_from_system(&mut self) -> bool {
        let proposed = Theme::from_prefers_dark(self.host.prefers_dark());
        self.set(proposed)
    }

    /// Switch to `theme`.
    ///
    /// The store is written only when its value differs from `theme`; the
    /// host is notified only when the in-memory state changes. Returns true
    /// if the theme changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if read_persisted(&self.store) != Some(theme) {
            persist(&self.store, theme);
        }
        if self.theme == theme {
            return false;
        }
        self.theme = theme;
        self.host.apply_theme(theme);
        tracing::debug!(theme = %theme, "theme changed");
        true
    }
}

fn persist<S: KeyValueStore>(store: &S, theme: Theme) {
    if let Err(e) = save_json(store, keys::THEME, &theme) {
        tracing::warn!(theme = %theme, error = %e, "failed to persist theme");
    }
}

/// Read the stored theme. Accepts the JSON form (`"dark"`) and the bare
/// legacy form (`dark`); anything else is discarded.
fn read_persisted<S: KeyValueStore>(store: &S) -> Option<Theme> {
    let raw = match store.get(keys::THEME) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted theme");
            return None;
        }
    };
    if let Ok(theme) = serde_json::from_str::<Theme>(&raw) {
        return Some(theme);
    }
    match raw.parse::<Theme>() {
        Ok(theme) => Some(theme),
        Err(e) => {
            tracing::warn!(error = %e, "discarding corrupt persisted theme");
            if let Err(e) = store.remove(keys::THEME) {
                tracing::warn!(error = %e, "failed to remove corrupt persisted theme");
            }
            None
        }
    }
}
