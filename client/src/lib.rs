//! # texts-ui
//!
//! Leptos + WASM frontend for experiment text values. A batch of
//! `{step, index, text}` records is either rendered item by item with a
//! specialized viewer (tables, molecular structures, HTML fragments) when
//! every value is a `data:text/...` URI, or shown as a searchable list.
//!
//! Pure classification, decoding and planning live in `payload` and
//! `render`; `components` turns plans into views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod payload;
pub mod render;
pub mod state;
pub mod util;

/// Browser entry point: hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
