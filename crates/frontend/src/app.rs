use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the global UI state store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <Shell />
        </ThemeProvider>
    }
}
