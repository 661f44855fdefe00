//! Sub-header: breadcrumb strip and the configuration tab bar.

use crate::layout::global_context::{AppGlobalContext, ConsoleTab};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn SubHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="sub-header">
            // Breadcrumbs
            <div class="sub-header__breadcrumbs">
                <span class="sub-header__crumb">"Home"</span>
                <span>"/"</span>
                <div class="sub-header__crumb-chip">
                    <span>{move || ctx.active_nav_item.get()}</span>
                    <button class="sub-header__crumb-close">"×"</button>
                </div>
            </div>

            // Tabs
            <div class="sub-header__tabs">
                {ConsoleTab::all().into_iter().map(|tab| {
                    let is_active = move || ctx.active_tab.get() == tab;
                    view! {
                        <button
                            class=move || if is_active() {
                                "sub-header__tab sub-header__tab--active"
                            } else {
                                "sub-header__tab"
                            }
                            on:click=move |_| ctx.activate_tab(tab)
                        >
                            {icon(tab.icon_name())}
                            {tab.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
