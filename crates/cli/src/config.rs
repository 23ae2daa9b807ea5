//! TOML configuration for the receipt generator
//!
//! Every field has a default, so running without a `recibos.toml` works with
//! the stock spreadsheet name and placeholder letterhead.

use crate::logrotate::{DEFAULT_MAX_LINES, DEFAULT_TRIM_BLOCK};
use receipt::Letterhead;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub letterhead: Letterhead,
    pub log: LogConfig,
}

/// Where the billing rows come from
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub file: String,
    pub sheet: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            file: "Planilha_Cadastro_Recibos.xlsx".to_string(),
            sheet: "Recibos".to_string(),
        }
    }
}

/// Log file location and rotation thresholds
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub dir: String,
    pub max_lines: usize,
    pub trim_block: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            max_lines: DEFAULT_MAX_LINES,
            trim_block: DEFAULT_TRIM_BLOCK,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })
    }
}
