//! Collapsible list of cited sources.

use leptos::prelude::*;

use crate::components::result_view::SourceRow;

/// Expander over source rows; collapsed until the user opens it.
#[component]
pub fn SourceList(rows: Vec<SourceRow>) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let count = rows.len();

    let items = rows
        .into_iter()
        .map(|row| {
            view! {
                <li class="source-list__item">
                    <div class="source-list__item-header">
                        <span class=row.accent.class()>{row.label}</span>
                        <span class="source-list__score">{row.score}</span>
                    </div>
                    <p class="source-list__text">{row.text}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="source-list" class:source-list--expanded=move || expanded.get()>
            <button
                class="source-list__toggle"
                type="button"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| expanded.update(|open| *open = !*open)
            >
                <span>{format!("Sources ({count})")}</span>
                <span class="source-list__chevron">{move || if expanded.get() { "[-]" } else { "[+]" }}</span>
            </button>
            <ol class="source-list__items" hidden=move || !expanded.get()>
                {items}
            </ol>
        </div>
    }
}
