//! Content sniffing and decoding for `data:text/...` payloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Experiment code smuggles rich values through a plain text metric by
//! wrapping them in a data URI envelope: `data:text/<subtype>,<payload>`.
//! `classify` maps a text onto a closed [`PayloadKind`]; `decode` recovers the
//! typed payload for that kind. Neither panics on malformed input.

pub mod classify;
pub mod decode;

pub use classify::{PayloadKind, classify, is_rich_batch, is_rich_text};
pub use decode::{DecodeError, DecodedPayload, MolecularFormat, MolecularPayload, TableData, decode};

/// Prefix shared by every rich payload.
pub const RICH_PREFIX: &str = "data:text/";
/// Prefix of JSON table payloads.
pub const TABLE_PREFIX: &str = "data:text/table,";
/// Prefix of raw HTML payloads.
pub const HTML_PREFIX: &str = "data:text/html,";
/// Prefix of inline images nested inside table cells.
pub const IMAGE_PREFIX: &str = "data:image/";
