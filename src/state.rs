//! Shared preview-host state.
//!
//! DESIGN
//! ======
//! The host owns a single batch of text items behind an `RwLock`. `GET`
//! requests clone a snapshot; `PUT` replaces the whole batch so the client
//! always sees a consistent collection.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use texts_ui::config::RenderConfig;
use texts_ui::net::types::Item;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("parse text items: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct AppState {
    pub texts: Arc<RwLock<Vec<Item>>>,
    /// Render overrides passed through to the client, `None` keeps its defaults.
    pub render: Option<RenderConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(items: Vec<Item>, render: Option<RenderConfig>) -> Self {
        Self { texts: Arc::new(RwLock::new(items)), render }
    }

    pub async fn snapshot(&self) -> Vec<Item> {
        self.texts.read().await.clone()
    }

    /// Replace the batch and return the new item count.
    pub async fn replace(&self, items: Vec<Item>) -> usize {
        let count = items.len();
        *self.texts.write().await = items;
        count
    }
}

/// Parse a JSON array of `{step, index, text}` records.
///
/// # Errors
///
/// Returns [`LoadError::Json`] when the input is not an item array.
pub fn load_items(raw: &str) -> Result<Vec<Item>, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse an item file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Json`] if it does not hold an item array.
pub fn load_items_file(path: &Path) -> Result<Vec<Item>, LoadError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.display().to_string(), source })?;
    load_items(&raw)
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
