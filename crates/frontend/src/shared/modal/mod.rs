use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Wire a window-level keydown listener that runs `on_close` on Escape.
///
/// The listener stays registered for the page lifetime; `on_close` is a
/// no-op once the dialog that installed it has been dismissed.
fn close_on_escape(on_close: Callback<()>) {
    Effect::new(move |_| {
        let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let escape_pressed = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(|key_event| key_event.key() == "Escape")
                .unwrap_or(false);
            if escape_pressed {
                on_close.run(());
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
            handler.forget();
        }
    });
}

/// Overlay dialog used by the edit form and the global search.
///
/// Dismissed by the header close button, a click on the backdrop, or the
/// Escape key. Clicks inside the dialog body never reach the backdrop.
#[component]
pub fn Modal(
    /// Caption shown in the dialog header
    title: String,
    /// Invoked for every dismissal path
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    close_on_escape(on_close);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button
                        class="button button--icon modal__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
