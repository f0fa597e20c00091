//! Configuration file loading for the fenboard CLI.
//!
//! Settings come from an optional `fenboard.toml`; command-line flags
//! override them.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// CLI output settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Print the board diagram.
    pub show_board: bool,
    /// Print the Zobrist hash.
    pub show_hash: bool,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_board: true,
            show_hash: true,
            json: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default configuration file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "fenboard.toml";

    /// Loads configuration from `path`, or from [`Self::FILE_NAME`] if it
    /// exists. A missing default file yields the defaults; an explicitly
    /// named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(Self::FILE_NAME), false),
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadError { path, source })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
