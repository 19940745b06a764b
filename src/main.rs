mod config;
mod routes;
mod state;

use config::{ConfigError, PreviewConfig};
use state::{AppState, LoadError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{0}")]
    Router(String),
    #[error("bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "texts-preview failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = PreviewConfig::from_env()?;

    let items = match &config.texts_file {
        Some(path) => {
            let items = state::load_items_file(path)?;
            tracing::info!(path = %path.display(), count = items.len(), "text batch loaded");
            items
        }
        None => {
            tracing::warn!("TEXTS_FILE not set; serving an empty batch");
            Vec::new()
        }
    };

    let state = AppState::new(items, config.render_overrides());
    let app = routes::leptos_app(state).map_err(StartupError::Router)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|source| StartupError::Bind { port, source })?;

    tracing::info!(%port, "texts-preview listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
