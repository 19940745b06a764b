//! Preview host configuration parsed from environment variables.

use std::path::PathBuf;

use texts_ui::config::RenderConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub port: u16,
    /// JSON array of `{step, index, text}` loaded at startup.
    pub texts_file: Option<PathBuf>,
    /// Overrides the large-table column threshold sent to the client.
    pub large_table_columns: Option<usize>,
}

impl PreviewConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TEXTS_FILE`: batch served at startup; empty batch when absent
    /// - `LARGE_TABLE_COLUMNS`: client default (50) when absent
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let texts_file = std::env::var("TEXTS_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let large_table_columns =
            parse_optional_usize("LARGE_TABLE_COLUMNS", std::env::var("LARGE_TABLE_COLUMNS").ok().as_deref())?;

        Ok(Self { port, texts_file, large_table_columns })
    }

    /// Render overrides for `GET /api/texts`, or `None` to keep client defaults.
    #[must_use]
    pub fn render_overrides(&self) -> Option<RenderConfig> {
        self.large_table_columns
            .map(|large_table_columns| RenderConfig { large_table_columns, ..RenderConfig::default() })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

fn parse_optional_usize(var: &'static str, raw: Option<&str>) -> Result<Option<usize>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
