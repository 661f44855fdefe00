pub mod global_context;
pub mod header;
pub mod placeholder;
pub mod sub_header;

use leptos::prelude::*;

use crate::domain::result_pattern::ui::list::filter_bar::FilterBar;
use crate::domain::result_pattern::ui::list::ResultPatternList;
use global_context::{AppGlobalContext, ConsoleTab};
use header::Header;
use placeholder::PlaceholderPane;
use sub_header::SubHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 Header                    |
/// +------------------------------------------+
/// |       SubHeader (breadcrumbs + tabs)      |
/// +------------------------------------------+
/// |            Active tab content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <Header />

            <main class="app-main">
                <SubHeader />

                {move || match ctx.active_tab.get() {
                    ConsoleTab::ResultPatterns => view! {
                        <FilterBar />
                        <ResultPatternList />
                    }
                    .into_any(),
                    tab => view! { <PlaceholderPane tab=tab /> }.into_any(),
                }}
            </main>
        </div>
    }
}
