//! Per-batch and per-item rendering plans.
//!
//! DESIGN
//! ======
//! The batch gate runs first and is all-or-nothing. Only on the rich path is
//! each item classified, decoded and mapped to exactly one [`Block`]. Plans
//! are plain values so a `Memo` can diff them between render passes.

#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use std::hash::{DefaultHasher, Hash, Hasher};

use super::document::table_document;
use crate::config::RenderConfig;
use crate::net::types::Item;
use crate::payload::{DecodedPayload, MolecularPayload, PayloadKind, TableData, classify, decode, is_rich_batch};

/// How a decoded table is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableStrategy {
    /// Interactive grid rendered in the host page.
    InPageGrid,
    /// Standalone document with its own sort/search, in a sandboxed frame.
    FullPageSurface,
}

/// Pick the table strategy for `column_count` columns.
#[must_use]
pub fn table_strategy(column_count: usize, config: &RenderConfig) -> TableStrategy {
    if column_count > config.large_table_columns {
        TableStrategy::FullPageSurface
    } else {
        TableStrategy::InPageGrid
    }
}

/// Origin of a sandboxed frame document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    Table,
    Html,
}

/// Item that could not be decoded; shown inline instead of the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderError {
    pub kind: PayloadKind,
    pub message: String,
}

/// The single visual block rendered below an item's step header.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Grid(TableData),
    /// Full HTML document for a sandboxed frame.
    Surface { kind: SurfaceKind, document: String },
    Molecule(MolecularPayload),
    Text(String),
    Error(RenderError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemPlan {
    pub step: i64,
    pub index: i64,
    /// Position in the input batch.
    pub position: usize,
    /// Stable across reloads while the item at `position` and the render
    /// config are unchanged.
    pub key: u64,
    pub kind: PayloadKind,
    pub block: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BatchPlan {
    /// Items in display order (most recent first).
    Rich(Vec<ItemPlan>),
    /// Show the whole batch in the generic list.
    Fallback,
}

/// Plan a whole batch.
#[must_use]
pub fn plan_batch(items: &[Item], config: &RenderConfig) -> BatchPlan {
    if !is_rich_batch(items) {
        return BatchPlan::Fallback;
    }
    let plans = items
        .iter()
        .enumerate()
        .rev()
        .map(|(position, item)| plan_item(item, position, config))
        .collect();
    BatchPlan::Rich(plans)
}

/// Classify, decode and dispatch one item.
#[must_use]
pub fn plan_item(item: &Item, position: usize, config: &RenderConfig) -> ItemPlan {
    let kind = classify(&item.text);
    let block = match decode(kind, &item.text) {
        Ok(decoded) => block_for(decoded, item, config),
        Err(err) => {
            leptos::logging::warn!("step {} ({kind}) could not be decoded: {err}", item.step);
            Block::Error(RenderError { kind, message: err.to_string() })
        }
    };
    ItemPlan { step: item.step, index: item.index, position, key: view_key(item, position, config), kind, block }
}

/// Key for keyed item lists: position, item contents and the config the
/// block was planned with.
#[must_use]
pub fn view_key(item: &Item, position: usize, config: &RenderConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    position.hash(&mut hasher);
    item.hash(&mut hasher);
    config.hash(&mut hasher);
    hasher.finish()
}

fn block_for(decoded: DecodedPayload, item: &Item, config: &RenderConfig) -> Block {
    match decoded {
        DecodedPayload::Table(table) => {
            let mismatched = table.mismatched_rows();
            if !mismatched.is_empty() {
                leptos::logging::warn!(
                    "step {}: {} table rows do not match {} columns",
                    item.step,
                    mismatched.len(),
                    table.column_count()
                );
            }
            match table_strategy(table.column_count(), config) {
                TableStrategy::InPageGrid => Block::Grid(table),
                TableStrategy::FullPageSurface => Block::Surface {
                    kind: SurfaceKind::Table,
                    document: table_document(&table, config, 0),
                },
            }
        }
        DecodedPayload::Molecular(payload) => Block::Molecule(payload),
        DecodedPayload::Html(markup) => Block::Surface { kind: SurfaceKind::Html, document: markup },
        DecodedPayload::PlainText(text) => Block::Text(text),
    }
}
