//! Header component - application top bar.
//!
//! Contains:
//! - Brand block and primary navigation
//! - Global search button and modal
//! - Theme toggle
//! - Environment badge and user menu

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

/// Primary navigation entries: (icon, label)
const NAV_ITEMS: [(&str, &str); 6] = [
    ("box", "Equipment"),
    ("git-fork", "Routes"),
    ("shopping-cart", "Orders"),
    ("settings", "Attributes"),
    ("users", "Personnel"),
    ("grip", "Miscellaneous"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme = use_theme();

    let (search_open, set_search_open) = signal(false);
    let (search_query, set_search_query) = signal(String::new());
    let (user_menu_open, set_user_menu_open) = signal(false);

    // Close the user menu when clicking anywhere outside it
    Effect::new(move |_| {
        if user_menu_open.get() {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                set_user_menu_open.set(false);
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget(); // Keep the closure alive
            }
        }
    });

    view! {
        <header class="top-header">
            // Left section - brand and primary navigation
            <div class="top-header__brand">
                <div class="top-header__logo">"JLR"</div>
                <div class="top-header__name">
                    <span class="top-header__title">"M-Config"</span>
                    <span class="top-header__subtitle">"Configuration Manager"</span>
                </div>

                <div class="top-header__divider"></div>

                <nav class="top-header__nav">
                    {NAV_ITEMS.into_iter().map(|(icon_name, label)| {
                        let is_active = move || ctx.active_nav_item.get() == label;
                        view! {
                            <button
                                class=move || if is_active() {
                                    "nav-button nav-button--active"
                                } else {
                                    "nav-button"
                                }
                                on:click=move |_| ctx.active_nav_item.set(label.to_string())
                            >
                                {icon(icon_name)}
                                <span>{label}</span>
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title="Search"
                    on:click=move |_| set_search_open.set(true)
                >
                    {icon("search")}
                </button>

                <button
                    class="top-header__icon-btn"
                    title="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || if theme.is_dark() { icon("sun") } else { icon("moon") }}
                </button>

                <div class="top-header__env-badge">
                    <span class="top-header__env-dot"></span>
                    "Production"
                </div>

                <div
                    class="top-header__user"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_user_menu_open.update(|open| *open = !*open);
                    }
                >
                    <span>"rjain16"</span>
                    <div class="top-header__avatar">{icon("user")}</div>

                    <Show when=move || user_menu_open.get()>
                        <div class="user-menu" on:click=move |ev| ev.stop_propagation()>
                            <button class="user-menu__item">"Profile"</button>
                            <button class="user-menu__item">"Settings"</button>
                            <div class="user-menu__divider"></div>
                            <button class="user-menu__item">"Sign out"</button>
                        </div>
                    </Show>
                </div>
            </div>

            // Global search modal
            <Show when=move || search_open.get()>
                <Modal
                    title="Search".to_string()
                    on_close=Callback::new(move |_| {
                        set_search_open.set(false);
                        set_search_query.set(String::new());
                    })
                >
                    <div class="search-modal">
                        <div class="search-modal__input-row">
                            {icon("search")}
                            <input
                                class="search-modal__input"
                                type="text"
                                placeholder="Search configurations, patterns, attributes..."
                                prop:value=move || search_query.get()
                                on:input=move |ev| set_search_query.set(event_target_value(&ev))
                            />
                            <Show when=move || !search_query.get().is_empty()>
                                <button
                                    class="button button--icon"
                                    on:click=move |_| set_search_query.set(String::new())
                                >
                                    {icon("x")}
                                </button>
                            </Show>
                        </div>
                        <div class="search-modal__results">
                            {move || {
                                let query = search_query.get();
                                if query.is_empty() {
                                    view! {
                                        <p class="search-modal__hint">"Start typing to search"</p>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <p>{format!("Search results for \"{}\":", query)}</p>
                                        <p class="search-modal__hint">"No results found"</p>
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </div>
                </Modal>
            </Show>
        </header>
    }
}
