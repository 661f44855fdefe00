pub mod filter_bar;
pub mod state;

use self::state::create_state;
use crate::domain::result_pattern::filter::filter_patterns;
use crate::domain::result_pattern::ui::details::ResultPatternDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use contracts::domain::result_pattern::{ResultPattern, ResultPatternId};
use leptos::prelude::*;

/// Tabular editor for result pattern records.
///
/// Owns the pattern store and the selection set; the visible rows are a
/// derived view of the store and the shared filter signals.
#[component]
#[allow(non_snake_case)]
pub fn ResultPatternList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let (editing_id, set_editing_id) = signal::<Option<ResultPatternId>>(None);

    // Rows matching the current filters, in store order
    let filtered = Memo::new(move |_| {
        let name_filter = ctx.pattern_name_filter.get();
        let type_filter = ctx.pattern_type_filter.get();
        state.with(|s| filter_patterns(s.store.list(), &name_filter, type_filter))
    });

    // Prune the selection whenever rows leave the visible view, so bulk
    // actions can never touch rows the user is not looking at
    Effect::new(move |_| {
        let visible: Vec<ResultPatternId> = filtered.get().iter().map(|p| p.id).collect();
        let stale = state.with_untracked(|s| {
            s.selection.ids().iter().any(|id| !visible.contains(id))
        });
        if stale {
            state.update(|s| s.selection.retain_visible(&visible));
        }
    });

    let toggle_selection = move |id: ResultPatternId| {
        state.update(|s| s.selection.toggle(id));
    };

    let toggle_all = move |_| {
        let visible: Vec<ResultPatternId> =
            filtered.get_untracked().iter().map(|p| p.id).collect();
        state.update(|s| s.selection.toggle_all(&visible));
    };

    let all_selected = move || {
        let visible: Vec<ResultPatternId> = filtered.get().iter().map(|p| p.id).collect();
        state.with(|s| s.selection.all_selected(&visible))
    };

    let selected_count = move || state.with(|s| s.selection.len());

    let handle_add = move |_| {
        state.update(|s| {
            let created = s.store.create();
            log::debug!("created result pattern {}", created.id);
        });
    };

    let handle_edit = move |_| {
        if let Some(id) = state.with(|s| s.selection.single()) {
            set_editing_id.set(Some(id));
        }
    };

    let handle_delete = move |_| {
        state.update(|s| {
            let selected: Vec<ResultPatternId> = s.selection.ids().to_vec();
            if selected.is_empty() {
                return;
            }
            let removed = s.store.delete(&selected);
            if removed != selected.len() {
                log::warn!(
                    "delete matched {} of {} selected result patterns",
                    removed,
                    selected.len()
                );
            }
            s.selection.clear();
        });
    };

    view! {
        <div class="pattern-table-pane">
            // Action toolbar
            <div class="pattern-toolbar">
                <div class="pattern-toolbar__summary">
                    <h2 class="pattern-toolbar__title">"Result Patterns"</h2>
                    <div class="pattern-toolbar__count">
                        {move || format!("({} Result Patterns Found)", filtered.get().len())}
                    </div>
                </div>

                <div class="pattern-toolbar__actions">
                    <button class="button button--primary" on:click=handle_add>
                        {icon("plus")}
                        " Add Result Pattern"
                    </button>
                    <button
                        class="button button--secondary"
                        prop:disabled=move || selected_count() != 1
                        on:click=handle_edit
                    >
                        {icon("edit")}
                        " Edit Result Pattern"
                    </button>
                    <button
                        class="button button--danger"
                        prop:disabled=move || selected_count() == 0
                        on:click=handle_delete
                    >
                        {icon("trash")}
                        " Delete Result Pattern"
                    </button>
                </div>
            </div>

            <div class="table-card">
                // Utility bar
                <div class="table-card__utility-bar">
                    <div class="table-card__search">
                        {icon("search")}
                        <input
                            type="text"
                            placeholder="Search all columns..."
                            class="table-card__search-input"
                        />
                    </div>
                    <button class="button button--ghost">
                        {icon("columns")}
                        " Columns"
                    </button>
                </div>

                // Table
                <div class="table-card__scroll">
                    <table class="table">
                        <thead class="table__head">
                            <tr>
                                <th class="table__cell table__cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=move || all_selected()
                                        on:change=toggle_all
                                    />
                                </th>
                                <HeaderCell label="PATTERN NAME" />
                                <HeaderCell label="PATTERN TYPE" />
                                <HeaderCell label="RESULT MAX LENGTH" />
                                <HeaderCell label="RESULT PATTERN" />
                                <HeaderCell label="RESULT MIN VALUE" />
                                <HeaderCell label="RESULT MAX VALUE" />
                            </tr>
                        </thead>
                        <tbody class="table__body">
                            <For
                                each=move || filtered.get()
                                key=|pattern| pattern.id
                                children=move |pattern: ResultPattern| {
                                    let id = pattern.id;
                                    view! {
                                        <tr class="table__row">
                                            <TableCheckbox
                                                checked=Signal::derive(move || {
                                                    state.with(|s| s.selection.contains(&id))
                                                })
                                                on_change=Callback::new(move |_| toggle_selection(id))
                                            />
                                            <td class="table__cell table__cell--primary">
                                                {pattern.pattern_name}
                                            </td>
                                            <td class="table__cell">
                                                {pattern.pattern_type.display_name()}
                                            </td>
                                            <td class="table__cell">
                                                {pattern.result_max_length.map(|v| v.to_string()).unwrap_or_default()}
                                            </td>
                                            <td class="table__cell table__cell--mono">
                                                {pattern.result_pattern}
                                            </td>
                                            <td class="table__cell">
                                                {pattern.result_min_value.map(|v| v.to_string()).unwrap_or_default()}
                                            </td>
                                            <td class="table__cell">
                                                {pattern.result_max_value.map(|v| v.to_string()).unwrap_or_default()}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                // Footer
                <div class="table-card__footer">
                    {move || format!("Showing {} rows", filtered.get().len())}
                </div>
            </div>

            <ResultPatternDetails
                id=editing_id
                state=state
                on_close=Callback::new(move |_| set_editing_id.set(None))
            />
        </div>
    }
}

/// Column header cell with the (decorative) sort and filter affordances
#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th class="table__cell table__cell--header">
            <div class="table__header-inner">
                <span>{label}</span>
                <div class="table__header-icons">
                    {icon("arrow-up-down")}
                    {icon("filter")}
                </div>
            </div>
        </th>
    }
}
