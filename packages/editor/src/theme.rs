//! Theme context: the one piece of app-wide presentation state.
//!
//! Created once at startup from the persisted value and changed only through
//! [`ThemeContext::set`], which persists the new name.

use tracing::{debug, warn};
use webbuilder_common::KeyValueStore;
use webbuilder_style::Theme;

/// Store key holding the theme name as plain text
pub const THEME_KEY: &str = "wb:theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    /// Load the persisted theme; unknown or unreadable values fall back to the default
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(name)) => Theme::from_name(name.trim()).unwrap_or_else(|| {
                warn!(theme = %name, "Unknown persisted theme, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read theme");
                Theme::default()
            }
        };
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme, store: &mut dyn KeyValueStore) {
        self.theme = theme;
        match store.set(THEME_KEY, theme.as_str()) {
            Ok(()) => debug!(theme = theme.as_str(), "Theme changed"),
            Err(e) => warn!(error = %e, "Failed to persist theme"),
        }
    }
}
