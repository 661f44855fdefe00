//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme system. The preference is
//! persisted in localStorage; when no preference is stored yet, the OS
//! color-scheme reported by `prefers-color-scheme` seeds the default.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

const THEME_STORAGE_KEY: &str = "theme";

/// Load theme from localStorage. `None` when nothing is stored or storage
/// is unavailable.
fn load_theme_from_storage() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
}

/// Save theme to localStorage. Best-effort: a missing or full storage
/// degrades to session-only state.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Whether the OS reports a dark color-scheme preference.
fn os_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// The theme to start with: stored preference, then OS preference, then light.
fn initial_theme() -> Theme {
    load_theme_from_storage().unwrap_or_else(|| {
        if os_prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

/// Apply theme to the document element.
fn apply_theme(theme: Theme) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        Some(el) => el,
        None => return,
    };

    let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme, apply it to the document and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        apply_theme(theme);
        save_theme_to_storage(theme);
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        let next = match self.theme.get() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set_theme(next);
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    // Resolve and apply the starting theme on initial render
    let theme = initial_theme();
    apply_theme(theme);

    let context = ThemeContext {
        theme: RwSignal::new(theme),
    };
    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_string_round_trip() {
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_light() {
        assert_eq!(Theme::from_str("forest"), Theme::Light);
        assert_eq!(Theme::from_str(""), Theme::Light);
    }
}
