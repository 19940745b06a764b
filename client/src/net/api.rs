//! REST helpers for loading the text batch.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the endpoint is only
//! fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade to
//! an inline message instead of breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::TextsResponse;

/// Path of the texts endpoint served by the preview host.
pub const TEXTS_ENDPOINT: &str = "/api/texts";

#[cfg(any(test, feature = "hydrate"))]
fn texts_request_failed_message(status: u16) -> String {
    format!("texts request failed: {status}")
}

/// Fetch the current batch from `GET /api/texts`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the host responds with a
/// non-OK status, or the body is not a valid [`TextsResponse`].
pub async fn fetch_texts() -> Result<TextsResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TEXTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(texts_request_failed_message(resp.status()));
        }
        resp.json::<TextsResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
