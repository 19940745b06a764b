//! Table cell contents, including data URIs nested inside cells.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::cmp::Ordering;

use serde_json::Value;

use super::document::nested_document;
use crate::config::RenderConfig;
use crate::payload::{IMAGE_PREFIX, PayloadKind, classify, is_rich_text};

/// What a single cell renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// Missing cell (short row) or JSON `null`.
    Empty,
    /// `data:image/...` URI shown as a thumbnail.
    Image(String),
    /// Nested rich text shown in its own sandboxed frame.
    Rich { kind: PayloadKind, document: String },
    Text(String),
}

/// Resolve a cell value at nesting `depth` (0 for a top-level table).
///
/// Nested rich text stops being expanded once `depth` reaches the configured
/// limit and is shown as raw text instead.
#[must_use]
pub fn classify_cell(value: Option<&Value>, config: &RenderConfig, depth: usize) -> CellContent {
    match value {
        None | Some(Value::Null) => CellContent::Empty,
        Some(Value::String(text)) if text.starts_with(IMAGE_PREFIX) => CellContent::Image(text.clone()),
        Some(Value::String(text)) if is_rich_text(text) && depth < config.nested_depth_limit => {
            CellContent::Rich { kind: classify(text), document: nested_document(text, config, depth + 1) }
        }
        Some(other) => CellContent::Text(display_text(other)),
    }
}

/// Plain text for a JSON value: strings unquoted, everything else as JSON.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Ordering used by sortable grids: numbers numerically, then strings, then
/// other JSON by its text, with missing cells last.
///
/// Values of different ranks never compare by content, so the ordering is
/// total even for mixed columns such as `0.91` next to `"n/a"`.
#[must_use]
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (rank_a, rank_b) = (sort_rank(a), sort_rank(b));
    if rank_a != rank_b {
        return rank_a.cmp(&rank_b);
    }
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
        _ => Ordering::Equal,
    }
}

fn sort_rank(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Number(_)) => 0,
        Some(Value::String(_)) => 1,
        Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => 2,
        None | Some(Value::Null) => 3,
    }
}
