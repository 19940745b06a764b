//! Scoped `blob:` URLs backing large sandboxed frame documents.
//!
//! DESIGN
//! ======
//! A `blob:` URL pins its document in browser memory until revoked. The
//! [`ObjectUrl`] guard revokes on drop, and components drop it from
//! `on_cleanup`, so re-rendering a batch never accumulates documents.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ObjectUrlError {
    #[error("object URLs are only available in the browser")]
    Unsupported,
    #[error("failed to create object URL: {0}")]
    Create(String),
}

/// Owned `blob:` URL, revoked when dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Store `document` as a `text/html` blob and return its URL.
    ///
    /// # Errors
    ///
    /// [`ObjectUrlError::Unsupported`] outside the browser,
    /// [`ObjectUrlError::Create`] when the blob or URL cannot be created.
    pub fn for_html(document: &str) -> Result<Self, ObjectUrlError> {
        #[cfg(feature = "hydrate")]
        {
            let describe = |e: wasm_bindgen::JsValue| ObjectUrlError::Create(format!("{e:?}"));
            let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(document));
            let options = web_sys::BlobPropertyBag::new();
            options.set_type("text/html;charset=utf-8");
            let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(describe)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(describe)?;
            Ok(Self { url })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = document;
            Err(ObjectUrlError::Unsupported)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
                leptos::logging::warn!("failed to revoke {}: {e:?}", self.url);
            }
        }
    }
}
