//! Payload kind detection.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use std::fmt;

use super::decode::MolecularFormat;
use super::{HTML_PREFIX, RICH_PREFIX, TABLE_PREFIX};
use crate::net::types::Item;

/// What a text value contains. Derived on every render, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// `data:text/table,` followed by `{columns, data}` JSON.
    Table,
    /// One of the chemistry file subtypes (`pdb`, `sdf`, `pdbqt`, `mol2`).
    Molecular,
    /// `data:text/html,` followed by raw markup.
    Html,
    /// Anything else.
    PlainText,
}

impl PayloadKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Molecular => "molecular",
            Self::Html => "html",
            Self::PlainText => "text",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single text value.
///
/// Precedence: table, molecular, html, plain text. Unknown subtypes such as
/// `data:text/plain,` fall through to [`PayloadKind::PlainText`].
#[must_use]
pub fn classify(text: &str) -> PayloadKind {
    if text.starts_with(TABLE_PREFIX) {
        PayloadKind::Table
    } else if molecular_format(text).is_some() {
        PayloadKind::Molecular
    } else if text.starts_with(HTML_PREFIX) {
        PayloadKind::Html
    } else {
        PayloadKind::PlainText
    }
}

/// Chemistry format named by the media type, i.e. the text up to the first
/// comma (the whole text when there is none).
#[must_use]
pub fn molecular_format(text: &str) -> Option<MolecularFormat> {
    let media_type = text.split_once(',').map_or(text, |(head, _)| head);
    media_type
        .strip_prefix(RICH_PREFIX)
        .and_then(MolecularFormat::from_subtype)
}

/// Whether a single text carries the rich payload envelope.
#[must_use]
pub fn is_rich_text(text: &str) -> bool {
    text.starts_with(RICH_PREFIX)
}

/// Batch gate: the rich path is taken only when the batch is non-empty and
/// every item carries the envelope. One plain item sends the whole batch to
/// the fallback list.
#[must_use]
pub fn is_rich_batch(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(|item| is_rich_text(&item.text))
}
