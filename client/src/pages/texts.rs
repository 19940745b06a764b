//! Texts page: loads the batch from the host and shows it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plays the container role for the visualizer: it owns fetching, loading
//! state and reload, and hands `items` / `is_loading` down as signals.

#[cfg(test)]
#[path = "texts_test.rs"]
mod texts_test;

use leptos::prelude::*;

use crate::components::texts_visualizer::TextsVisualizer;
use crate::config::RenderConfig;
use crate::net::api::fetch_texts;
use crate::state::texts::TextsState;

/// Summary line shown above the visualizer.
#[must_use]
pub fn batch_summary(state: &TextsState) -> String {
    match (state.is_loading, state.items.len()) {
        (true, _) => "Loading text values…".to_owned(),
        (false, 1) => "1 text value".to_owned(),
        (false, count) => format!("{count} text values"),
    }
}

/// Fetch the batch and install it, overriding render config when the host
/// provides one. Responses to superseded loads are ignored.
fn load_texts(texts: RwSignal<TextsState>, config: RwSignal<RenderConfig>) {
    let Some(ticket) = texts.try_update(TextsState::begin_load) else {
        return;
    };
    leptos::task::spawn_local(async move {
        match fetch_texts().await {
            Ok(response) => {
                let count = response.items.len();
                let render = response.render;
                let installed = texts
                    .try_update(|t| t.finish_load(ticket, response.items))
                    .unwrap_or(false);
                if !installed {
                    leptos::logging::log!("dropped stale batch of {count} text values");
                    return;
                }
                if let Some(render) = render {
                    config.set(render);
                }
                leptos::logging::log!("loaded {count} text values");
            }
            Err(err) => {
                leptos::logging::warn!("failed to load text values: {err}");
                texts.update(|t| {
                    t.fail_load(ticket, err);
                });
            }
        }
    });
}

#[component]
pub fn TextsPage() -> impl IntoView {
    let texts = expect_context::<RwSignal<TextsState>>();
    let config = expect_context::<RwSignal<RenderConfig>>();

    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || load_texts(texts, config));

    let items = Signal::derive(move || texts.with(|t| t.items.clone()));
    let is_loading = Signal::derive(move || texts.with(|t| t.is_loading));

    view! {
        <div class="texts-page">
            <header class="texts-page__header">
                <span class="texts-page__summary">{move || texts.with(batch_summary)}</span>
                <button
                    class="btn texts-page__reload"
                    disabled=move || is_loading.get()
                    on:click=move |_| load_texts(texts, config)
                >
                    "Reload"
                </button>
            </header>
            {move || texts.with(|t| t.error.clone()).map(|message| view! {
                <div class="render-error" role="alert">{message}</div>
            })}
            <TextsVisualizer items=items is_loading=is_loading/>
        </div>
    }
}
