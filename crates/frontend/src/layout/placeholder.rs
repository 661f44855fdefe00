use crate::layout::global_context::ConsoleTab;
use leptos::prelude::*;

/// Description and "coming soon" hint for tabs without a real editor yet
fn placeholder_copy(tab: ConsoleTab) -> (&'static str, &'static str) {
    match tab {
        ConsoleTab::AttributeGroups => (
            "Manage attribute groups and their configurations",
            "Coming soon: Create and organize attribute groups",
        ),
        ConsoleTab::Attributes => (
            "Configure individual attributes and their properties",
            "Coming soon: Define attribute schemas and validation rules",
        ),
        ConsoleTab::Switches => (
            "Manage configuration switches and toggles",
            "Coming soon: Control feature flags and system switches",
        ),
        ConsoleTab::Import => (
            "Import configurations from external sources",
            "Coming soon: Upload and import configuration files",
        ),
        ConsoleTab::Export => (
            "Export configurations to external formats",
            "Coming soon: Download configurations in various formats",
        ),
        ConsoleTab::Test => (
            "Test and validate configurations",
            "Coming soon: Run validation tests and check configuration integrity",
        ),
        ConsoleTab::ResultPatterns => ("Named validation and formatting rules", ""),
    }
}

/// Centered placeholder pane for a tab whose editor is not built yet.
#[component]
pub fn PlaceholderPane(tab: ConsoleTab) -> impl IntoView {
    let (description, hint) = placeholder_copy(tab);

    view! {
        <div class="placeholder-pane">
            <div class="placeholder-pane__content">
                <h3 class="placeholder-pane__title">{tab.label()}</h3>
                <p>{description}</p>
                <Show when=move || !hint.is_empty()>
                    <div class="placeholder-pane__hint">
                        <p>{hint}</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
