use contracts::enums::PatternType;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Tabs of the configuration sub-navigation strip.
///
/// Only `ResultPatterns` has a real pane behind it; the rest render
/// placeholder content until their editors are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTab {
    #[default]
    ResultPatterns,
    AttributeGroups,
    Attributes,
    Switches,
    Import,
    Export,
    Test,
}

impl ConsoleTab {
    /// Stable key used in the URL query string
    pub fn key(&self) -> &'static str {
        match self {
            ConsoleTab::ResultPatterns => "result-patterns",
            ConsoleTab::AttributeGroups => "attribute-groups",
            ConsoleTab::Attributes => "attributes",
            ConsoleTab::Switches => "switches",
            ConsoleTab::Import => "import",
            ConsoleTab::Export => "export",
            ConsoleTab::Test => "test",
        }
    }

    /// Tab caption in the sub-navigation strip
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleTab::ResultPatterns => "Result Patterns",
            ConsoleTab::AttributeGroups => "Attribute Groups",
            ConsoleTab::Attributes => "Attributes",
            ConsoleTab::Switches => "Switches",
            ConsoleTab::Import => "Import",
            ConsoleTab::Export => "Export",
            ConsoleTab::Test => "Test",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ConsoleTab::ResultPatterns => "list-filter",
            ConsoleTab::AttributeGroups => "layers",
            ConsoleTab::Attributes => "layers",
            ConsoleTab::Switches => "toggle-left",
            ConsoleTab::Import => "file-input",
            ConsoleTab::Export => "file-output",
            ConsoleTab::Test => "play",
        }
    }

    /// All tabs, in display order
    pub fn all() -> [ConsoleTab; 7] {
        [
            ConsoleTab::ResultPatterns,
            ConsoleTab::AttributeGroups,
            ConsoleTab::Attributes,
            ConsoleTab::Switches,
            ConsoleTab::Import,
            ConsoleTab::Export,
            ConsoleTab::Test,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.key() == key)
    }
}

/// Top-level UI state shared across the shell.
///
/// The filter values live here rather than in the pattern table so the
/// filter bar and the table stay in sync without prop threading.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<ConsoleTab>,
    pub active_nav_item: RwSignal<String>,
    pub pattern_name_filter: RwSignal<String>,
    pub pattern_type_filter: RwSignal<Option<PatternType>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(ConsoleTab::default()),
            active_nav_item: RwSignal::new("Attributes".to_string()),
            pattern_name_filter: RwSignal::new(String::new()),
            pattern_type_filter: RwSignal::new(None),
        }
    }

    pub fn activate_tab(&self, tab: ConsoleTab) {
        log::debug!("activate tab '{}'", tab.key());
        self.active_tab.set(tab);
    }

    /// Sync the active tab with the URL (?tab=...).
    ///
    /// Restores the tab named in the query string on startup, then mirrors
    /// every tab change back into the URL without adding history entries.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("tab").and_then(|key| ConsoleTab::from_key(key)) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active_tab.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                key.to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_key_round_trip() {
        for tab in ConsoleTab::all() {
            assert_eq!(ConsoleTab::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(ConsoleTab::from_key(""), None);
        assert_eq!(ConsoleTab::from_key("Result Patterns"), None);
    }

    #[test]
    fn test_default_tab_is_result_patterns() {
        assert_eq!(ConsoleTab::default(), ConsoleTab::ResultPatterns);
    }
}
