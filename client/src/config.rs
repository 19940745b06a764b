//! Rendering thresholds and viewer settings.
//!
//! DESIGN
//! ======
//! The values are plain data provided through Leptos context as an
//! `RwSignal<RenderConfig>`, so the host can override them per batch without
//! the pure planning code depending on the reactive runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Tables with more columns than this are rendered as a full-page document.
pub const DEFAULT_LARGE_TABLE_COLUMNS: usize = 50;
/// Height of molecule and HTML containers.
pub const DEFAULT_FRAME_HEIGHT_PX: u32 = 300;
/// Maximum number of nested sandboxed frames inside table cells.
pub const DEFAULT_NESTED_DEPTH_LIMIT: usize = 3;
/// Documents at least this large are served through `blob:` URLs.
pub const DEFAULT_OBJECT_URL_MIN_BYTES: usize = 64 * 1024;
/// Script loaded by nested molecule documents.
pub const DEFAULT_VIEWER_SCRIPT_URL: &str = "https://unpkg.com/miew@0.11.0/dist/Miew.min.js";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Column count above which a table leaves the in-page grid.
    pub large_table_columns: usize,
    pub frame_height_px: u32,
    pub nested_depth_limit: usize,
    pub object_url_min_bytes: usize,
    pub viewer_script_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            large_table_columns: DEFAULT_LARGE_TABLE_COLUMNS,
            frame_height_px: DEFAULT_FRAME_HEIGHT_PX,
            nested_depth_limit: DEFAULT_NESTED_DEPTH_LIMIT,
            object_url_min_bytes: DEFAULT_OBJECT_URL_MIN_BYTES,
            viewer_script_url: DEFAULT_VIEWER_SCRIPT_URL.to_owned(),
        }
    }
}

impl RenderConfig {
    /// Inline `style` for fixed-height containers.
    #[must_use]
    pub fn frame_height_style(&self) -> String {
        format!("height: {}px; position: relative;", self.frame_height_px)
    }
}

/// Config provided by an ancestor, or a detached default signal.
pub fn use_render_config() -> RwSignal<RenderConfig> {
    use_context::<RwSignal<RenderConfig>>().unwrap_or_else(|| RwSignal::new(RenderConfig::default()))
}
