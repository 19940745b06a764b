//! Full-screen toggle wrapper for viewer blocks.

use leptos::prelude::*;

/// Wraps `children` with an "Enter fullscreen" toggle that expands them to
/// cover the viewport.
#[component]
pub fn FullScreen(children: Children) -> impl IntoView {
    let active = RwSignal::new(false);

    view! {
        <div class="full-screen" class:full-screen--active=move || active.get()>
            <button class="btn full-screen__toggle" on:click=move |_| active.update(|v| *v = !*v)>
                {move || if active.get() { "Exit fullscreen" } else { "Enter fullscreen" }}
            </button>
            <div class="full-screen__body">{children()}</div>
        </div>
    }
}
