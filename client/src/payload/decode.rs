//! Typed payload recovery for each [`PayloadKind`].
//!
//! ERROR HANDLING
//! ==============
//! Decoding returns [`DecodeError`] instead of panicking. Callers turn errors
//! into a visible placeholder for the one item; the rest of the batch still
//! renders.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classify::PayloadKind;
use super::{HTML_PREFIX, TABLE_PREFIX};

/// Error returned by [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The table body is not `{columns, data}` JSON.
    #[error("table payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The envelope has no `,` between media type and body.
    #[error("payload has no ',' after its media type")]
    Malformed,
    /// The text does not carry the envelope of the requested kind.
    #[error("text is not a {expected} payload")]
    KindMismatch { expected: PayloadKind },
}

/// Chemistry file formats understood by the molecule viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MolecularFormat {
    Pdb,
    Sdf,
    Pdbqt,
    Mol2,
}

impl MolecularFormat {
    pub const ALL: [Self; 4] = [Self::Pdb, Self::Sdf, Self::Pdbqt, Self::Mol2];

    /// Parse the subtype of a `data:text/<subtype>` media type.
    #[must_use]
    pub fn from_subtype(subtype: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == subtype)
    }

    /// File type name passed to the viewer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdb => "pdb",
            Self::Sdf => "sdf",
            Self::Pdbqt => "pdbqt",
            Self::Mol2 => "mol2",
        }
    }
}

/// Column-major header plus row-major cells.
///
/// Rows are expected to have one cell per column. That is not enforced at
/// parse time; [`TableData::row_cells`] pads short rows and drops surplus
/// cells instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<Value>>,
}

impl TableData {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Cells of `row` aligned to the header; `None` marks a missing cell.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = Option<&Value>> + '_ {
        let cells = self.data.get(row).map_or(&[][..], Vec::as_slice);
        (0..self.columns.len()).map(move |col| cells.get(col))
    }

    /// Indices of rows whose length differs from the column count.
    #[must_use]
    pub fn mismatched_rows(&self) -> Vec<usize> {
        let width = self.columns.len();
        self.data
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != width)
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Structure file text plus the format it is written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MolecularPayload {
    pub format: MolecularFormat,
    /// Raw file contents, passed to the viewer verbatim.
    pub body: String,
}

/// Decoded form of one text value.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodedPayload {
    Table(TableData),
    Molecular(MolecularPayload),
    /// Raw markup with the envelope removed.
    Html(String),
    PlainText(String),
}

/// Decode `text` as a payload of `kind`.
///
/// # Errors
///
/// Returns [`DecodeError::Parse`] for malformed table JSON,
/// [`DecodeError::Malformed`] for a molecular envelope without a body, and
/// [`DecodeError::KindMismatch`] when `text` does not carry `kind`'s envelope.
pub fn decode(kind: PayloadKind, text: &str) -> Result<DecodedPayload, DecodeError> {
    match kind {
        PayloadKind::Table => decode_table(text).map(DecodedPayload::Table),
        PayloadKind::Molecular => decode_molecular(text).map(DecodedPayload::Molecular),
        PayloadKind::Html => decode_html(text).map(|markup| DecodedPayload::Html(markup.to_owned())),
        PayloadKind::PlainText => Ok(DecodedPayload::PlainText(text.to_owned())),
    }
}

/// Parse the JSON body of a `data:text/table,` payload.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_table(text: &str) -> Result<TableData, DecodeError> {
    let body = text
        .strip_prefix(TABLE_PREFIX)
        .ok_or(DecodeError::KindMismatch { expected: PayloadKind::Table })?;
    Ok(serde_json::from_str(body)?)
}

/// Split a molecular payload into its format and verbatim body.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_molecular(text: &str) -> Result<MolecularPayload, DecodeError> {
    let (media_type, body) = text.split_once(',').ok_or(DecodeError::Malformed)?;
    let subtype = media_type.rsplit_once('/').map_or(media_type, |(_, subtype)| subtype);
    let format = MolecularFormat::from_subtype(subtype)
        .ok_or(DecodeError::KindMismatch { expected: PayloadKind::Molecular })?;
    Ok(MolecularPayload { format, body: body.to_owned() })
}

/// Strip the envelope from a `data:text/html,` payload.
///
/// # Errors
///
/// Only [`DecodeError::KindMismatch`]; any markup body is accepted.
pub fn decode_html(text: &str) -> Result<&str, DecodeError> {
    text.strip_prefix(HTML_PREFIX)
        .ok_or(DecodeError::KindMismatch { expected: PayloadKind::Html })
}
