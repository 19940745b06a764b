//! Embedded 3-D viewer for a molecular structure payload.
//!
//! The viewer is mounted once per block, after the container exists in the
//! DOM, and terminated from `on_cleanup`. Failures leave the block in place
//! with an inline message.

use leptos::prelude::*;

use crate::components::full_screen::FullScreen;
use crate::config::use_render_config;
use crate::payload::MolecularPayload;
#[cfg(feature = "hydrate")]
use crate::util::molecule_viewer::{MoleculeViewer, ViewerSettings};

#[component]
pub fn MoleculeBlock(payload: MolecularPayload) -> impl IntoView {
    let config = use_render_config();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let viewer_error = RwSignal::new(None::<String>);
    let format = payload.format.as_str();

    #[cfg(feature = "hydrate")]
    {
        let viewer = StoredValue::new_local(None::<MoleculeViewer>);
        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            if viewer.with_value(Option::is_some) || viewer_error.get_untracked().is_some() {
                return;
            }
            match MoleculeViewer::mount(&container, &payload, ViewerSettings::default()) {
                Ok(handle) => viewer.set_value(Some(handle)),
                Err(err) => {
                    leptos::logging::warn!("{format} structure not shown: {err}");
                    viewer_error.set(Some(err.to_string()));
                }
            }
        });
        on_cleanup(move || {
            // Dropping the handle terminates the viewer.
            let _ = viewer.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = payload;

    view! {
        <div class="molecule-block" style=move || config.get().frame_height_style()>
            <FullScreen>
                <div class="molecule-block__viewer" node_ref=container_ref></div>
                {move || viewer_error.get().map(|message| view! {
                    <div class="render-error" role="alert">{message}</div>
                })}
            </FullScreen>
            <span class="molecule-block__format">{format}</span>
        </div>
    }
}
