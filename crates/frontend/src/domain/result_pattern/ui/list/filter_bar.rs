use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::enums::PatternType;
use leptos::prelude::*;

/// Filter bar above the pattern table.
///
/// Writes straight into the shared filter signals; the table derives its
/// visible rows from them, so filtering is live and the SEARCH button is
/// presentational.
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="filter-bar">
            <div class="form__group">
                <label class="form__label" for="pattern-name-filter">"Pattern Name Contains"</label>
                <input
                    class="form__input"
                    type="text"
                    id="pattern-name-filter"
                    placeholder="Search..."
                    prop:value=move || ctx.pattern_name_filter.get()
                    on:input=move |ev| ctx.pattern_name_filter.set(event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="pattern-type-filter">"Pattern Type"</label>
                <select
                    class="form__input"
                    id="pattern-type-filter"
                    prop:value=move || {
                        ctx.pattern_type_filter
                            .get()
                            .map(|ty| ty.code().to_string())
                            .unwrap_or_default()
                    }
                    on:change=move |ev| {
                        ctx.pattern_type_filter
                            .set(PatternType::from_code(&event_target_value(&ev)));
                    }
                >
                    <option value="">"All Pattern Type"</option>
                    {PatternType::all()
                        .into_iter()
                        .map(|ty| {
                            view! { <option value=ty.code()>{ty.display_name()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <button class="button button--primary filter-bar__search">
                {icon("search")}
                " SEARCH RESULT PATTERNS"
            </button>
        </div>
    }
}
