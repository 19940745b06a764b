//! Isolated rendering surface for untrusted markup.
//!
//! SECURITY
//! ========
//! Documents are loaded into an `<iframe>` carrying [`SANDBOX_POLICY`]: an
//! opaque origin with scripts allowed but no host cookies, storage, DOM,
//! popups or top navigation. The document is never injected into the host
//! page itself.

#[cfg(test)]
#[path = "sandboxed_frame_test.rs"]
mod sandboxed_frame_test;

use leptos::prelude::*;

use crate::config::{RenderConfig, use_render_config};
use crate::render::SANDBOX_POLICY;
use crate::render::document::html_data_uri;
#[cfg(feature = "hydrate")]
use crate::util::object_url::ObjectUrl;

/// Frame `src` used until a deferred document is ready.
pub const BLANK_SRC: &str = "about:blank";

/// Where a frame loads its document from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameSource {
    /// Percent-encoded `data:` URI, identical on server and client.
    Inline(String),
    /// Large document: a `blob:` URL is created after mount.
    Deferred,
}

#[must_use]
pub fn frame_source(document: &str, config: &RenderConfig) -> FrameSource {
    if document.len() >= config.object_url_min_bytes {
        FrameSource::Deferred
    } else {
        FrameSource::Inline(html_data_uri(document))
    }
}

/// Sandboxed `<iframe>` showing `document`.
#[component]
pub fn SandboxedFrame(document: String, #[prop(into)] title: String) -> impl IntoView {
    let config = use_render_config();
    let source = frame_source(&document, &config.get_untracked());
    let deferred = source == FrameSource::Deferred;
    let src = RwSignal::new(match source {
        FrameSource::Inline(uri) => uri,
        FrameSource::Deferred => BLANK_SRC.to_owned(),
    });

    #[cfg(feature = "hydrate")]
    {
        if deferred {
            let object_url = StoredValue::new_local(None::<ObjectUrl>);
            Effect::new(move || {
                if object_url.with_value(Option::is_some) {
                    return;
                }
                match ObjectUrl::for_html(&document) {
                    Ok(url) => {
                        src.set(url.as_str().to_owned());
                        object_url.set_value(Some(url));
                    }
                    Err(err) => leptos::logging::warn!("sandboxed frame has no document: {err}"),
                }
            });
            on_cleanup(move || {
                // Dropping the guard revokes the blob URL.
                let _ = object_url.try_update_value(Option::take);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (deferred, document);

    view! {
        <iframe
            class="sandboxed-frame"
            sandbox=SANDBOX_POLICY
            referrerpolicy="no-referrer"
            allowfullscreen=true
            title=title
            src=move || src.get()
        ></iframe>
    }
}
