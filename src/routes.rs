//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preview host stands in for the experiment application: it serves one
//! batch of text values over a small REST surface and renders the Leptos
//! visualizer at `/`, with hydration assets under `/pkg`.

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use texts_ui::net::types::{Item, ReplaceResponse, TextsResponse};

use crate::state::AppState;

/// REST routes consumed by the hydrated client.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/texts", get(list_texts).put(replace_texts))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full host: API routes + Leptos SSR at `/` + static assets at `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(texts_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || texts_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn list_texts(State(state): State<AppState>) -> Json<TextsResponse> {
    let items = state.snapshot().await;
    Json(TextsResponse { items, render: state.render.clone() })
}

async fn replace_texts(State(state): State<AppState>, Json(items): Json<Vec<Item>>) -> Json<ReplaceResponse> {
    let count = state.replace(items).await;
    tracing::info!(count, "text batch replaced");
    Json(ReplaceResponse { count })
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
