//! Result pattern details form, shown as a modal over the list.

mod view_model;

pub use view_model::ResultPatternDetailsViewModel;

use crate::domain::result_pattern::ui::list::state::ResultPatternListState;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::result_pattern::ResultPatternId;
use contracts::enums::PatternType;
use leptos::prelude::*;

#[component]
pub fn ResultPatternDetails(
    id: ReadSignal<Option<ResultPatternId>>,
    state: RwSignal<ResultPatternListState>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ResultPatternDetailsViewModel::new();

    // Load the selected record into the form whenever the modal opens
    Effect::new(move |_| {
        if let Some(current) = id.get() {
            let record = state.with_untracked(|s| s.store.get(&current).cloned());
            match record {
                Some(record) => vm.load(&record),
                None => {
                    // A stale edit action; the row is already gone
                    log::warn!("edit requested for missing result pattern {}", current);
                    vm.error.set(Some("Result pattern no longer exists".to_string()));
                }
            }
        }
    });

    let handle_save = move |_| {
        let Some(current) = id.get_untracked() else {
            return;
        };
        let draft = vm.form.get_untracked();
        if draft.pattern_name.trim().is_empty() {
            vm.error.set(Some("Pattern name is required".to_string()));
            return;
        }

        let mut result = Ok(());
        state.update(|s| result = s.store.update(&current, &draft));
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => {
                log::warn!("failed to save result pattern: {}", e);
                vm.error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <Show when=move || id.get().is_some()>
            <Modal title="Edit Result Pattern".to_string() on_close=on_close>
                <div class="modal-actions-top">
                    <button
                        class="button button--primary"
                        on:click=handle_save
                        prop:disabled=move || !vm.is_form_valid()
                    >
                        {icon("save")}
                        " Save"
                    </button>
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

                <div class="detail-form">
                    <div class="form__group">
                        <label class="form__label" for="pattern-name">"Pattern Name"</label>
                        <input
                            class="form__input"
                            type="text"
                            id="pattern-name"
                            prop:value=move || vm.form.get().pattern_name
                            on:input=move |ev| {
                                vm.form.update(|f| f.pattern_name = event_target_value(&ev));
                            }
                            placeholder="Enter pattern name"
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="pattern-type">"Pattern Type"</label>
                        <select
                            class="form__input"
                            id="pattern-type"
                            prop:value=move || vm.form.get().pattern_type.code().to_string()
                            on:change=move |ev| {
                                if let Some(ty) = PatternType::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.pattern_type = ty);
                                }
                            }
                        >
                            {PatternType::all()
                                .into_iter()
                                .map(|ty| {
                                    view! { <option value=ty.code()>{ty.display_name()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="result-max-length">"Result Max Length"</label>
                        <input
                            class="form__input"
                            type="number"
                            id="result-max-length"
                            min="0"
                            prop:value=move || {
                                vm.form.get().result_max_length.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                // Blank or unparsable input clears the bound
                                vm.form.update(|f| {
                                    f.result_max_length = event_target_value(&ev).trim().parse().ok();
                                });
                            }
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="result-pattern">"Result Pattern"</label>
                        <input
                            class="form__input form__input--mono"
                            type="text"
                            id="result-pattern"
                            prop:value=move || vm.form.get().result_pattern
                            on:input=move |ev| {
                                vm.form.update(|f| f.result_pattern = event_target_value(&ev));
                            }
                            placeholder="e.g. #####"
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="result-min-value">"Result Min Value"</label>
                        <input
                            class="form__input"
                            type="number"
                            id="result-min-value"
                            prop:value=move || {
                                vm.form.get().result_min_value.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                vm.form.update(|f| {
                                    f.result_min_value = event_target_value(&ev).trim().parse().ok();
                                });
                            }
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="result-max-value">"Result Max Value"</label>
                        <input
                            class="form__input"
                            type="number"
                            id="result-max-value"
                            prop:value=move || {
                                vm.form.get().result_max_value.map(|v| v.to_string()).unwrap_or_default()
                            }
                            on:input=move |ev| {
                                vm.form.update(|f| {
                                    f.result_max_value = event_target_value(&ev).trim().parse().ok();
                                });
                            }
                        />
                    </div>

                    {move || {
                        id.get()
                            .and_then(|current| {
                                state.with(|s| s.store.get(&current).map(|p| p.metadata.clone()))
                            })
                            .map(|meta| {
                                view! {
                                    <div class="detail-form__meta">
                                        <span>
                                            {format!("Created {}", format_datetime(&meta.created_at.to_rfc3339()))}
                                        </span>
                                        <span>
                                            {format!("Updated {}", format_datetime(&meta.updated_at.to_rfc3339()))}
                                        </span>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Modal>
        </Show>
    }
}
