//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::RenderConfig;
use crate::pages::texts::TextsPage;
use crate::state::texts::TextsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the texts state and render config, and loads the molecule viewer
/// script used by in-page molecule blocks.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // SSR renders the loading state; the page starts the real load on mount.
    let texts = RwSignal::new(TextsState { is_loading: true, ..TextsState::default() });
    let config = RwSignal::new(RenderConfig::default());

    provide_context(texts);
    provide_context(config);

    let viewer_script = config.get_untracked().viewer_script_url;

    view! {
        <Stylesheet id="leptos" href="/pkg/texts-preview.css"/>
        <Title text="Texts"/>
        <Script src=viewer_script/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TextsPage/>
            </Routes>
        </Router>
    }
}
