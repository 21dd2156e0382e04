use super::Theme;

/// The environment a [`ThemePreference`](super::ThemePreference) runs in.
pub trait ColorSchemeHost: Send + Sync {
    /// Whether the host currently reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Mirror the resolved theme onto the host's rendering surface.
    fn apply_theme(&self, _theme: Theme) {}
}

/// A host with a fixed system preference and no rendering surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedColorScheme(pub Theme);

impl ColorSchemeHost for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0.is_dark()
    }
}
