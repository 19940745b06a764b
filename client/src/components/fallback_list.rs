//! Generic Step / Index / Text list for batches that are not all rich.
//!
//! Text is shown preformatted and is searchable. Rows are revealed a page at
//! a time so very long batches do not build thousands of nodes up front.

#[cfg(test)]
#[path = "fallback_list_test.rs"]
mod fallback_list_test;

use leptos::prelude::*;

use crate::net::types::Item;

/// Rows added per "Show more" click.
pub const PAGE_ROWS: usize = 200;

/// Case-insensitive substring match; a blank query matches everything.
#[must_use]
pub fn text_matches(text: &str, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || text.to_lowercase().contains(&needle)
}

#[must_use]
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| text_matches(&item.text, query))
        .cloned()
        .collect()
}

/// Rows not yet revealed.
#[must_use]
pub fn hidden_count(total: usize, shown: usize) -> usize {
    total.saturating_sub(shown)
}

#[component]
pub fn FallbackList(#[prop(into)] items: Signal<Vec<Item>>, #[prop(into)] is_loading: Signal<bool>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let shown = RwSignal::new(PAGE_ROWS);
    let matches = Memo::new(move |_| items.with(|all| filter_items(all, &query.get())));

    view! {
        <div class="fallback-list">
            <div class="fallback-list__bar">
                <input
                    class="fallback-list__search"
                    type="search"
                    placeholder="Search text"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        shown.set(PAGE_ROWS);
                    }
                />
                {move || is_loading.get().then(|| view! {
                    <span class="fallback-list__loading">"Loading…"</span>
                })}
            </div>
            <div class="fallback-list__header">
                <span class="fallback-list__col fallback-list__col--step">"Step"</span>
                <span class="fallback-list__col fallback-list__col--index">"Index"</span>
                <span class="fallback-list__col fallback-list__col--text">"Text"</span>
            </div>
            <div class="fallback-list__rows">
                {move || {
                    let rows = matches.get();
                    if rows.is_empty() {
                        let message = if is_loading.get() { "" } else { "No text values." };
                        return view! { <div class="fallback-list__empty">{message}</div> }.into_any();
                    }
                    let limit = shown.get();
                    let hidden = hidden_count(rows.len(), limit);
                    view! {
                        {rows.into_iter().take(limit).map(|item| view! {
                            <div class="fallback-list__row">
                                <span class="fallback-list__col fallback-list__col--step">{item.step}</span>
                                <span class="fallback-list__col fallback-list__col--index">{item.index}</span>
                                <div class="fallback-list__col fallback-list__col--text">
                                    <pre>{item.text}</pre>
                                </div>
                            </div>
                        }).collect_view()}
                        {(hidden > 0).then(|| view! {
                            <button
                                class="btn fallback-list__more"
                                on:click=move |_| shown.update(|n| *n += PAGE_ROWS)
                            >
                                {format!("Show more ({hidden} hidden)")}
                            </button>
                        })}
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
