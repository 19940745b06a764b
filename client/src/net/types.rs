//! Shared DTOs for the client/host boundary.
//!
//! DESIGN
//! ======
//! Experiment tooling serializes steps from dynamically typed code, so integer
//! fields accept integral floats (`3.0`) as well as plain integers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::RenderConfig;

/// One recorded text value.
///
/// `text` is either a `data:text/<subtype>,<payload>` URI or arbitrary plain
/// text. Items are never modified after they are received.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Training step the value was recorded at.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub step: i64,
    /// Position of the value within its step.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub index: i64,
    /// Raw recorded text.
    pub text: String,
}

impl Item {
    #[must_use]
    pub fn new(step: i64, index: i64, text: impl Into<String>) -> Self {
        Self { step, index, text: text.into() }
    }
}

/// Response body of `GET /api/texts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextsResponse {
    pub items: Vec<Item>,
    /// Host-side overrides for rendering thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderConfig>,
}

/// Response body of `PUT /api/texts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceResponse {
    pub count: usize,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
