//! Configuration for docsift.
//!
//! A single optional TOML file, `~/.docsift.toml`, supplies search defaults.
//! A missing file yields the defaults; a malformed file is a hard error so
//! typos do not silently fall back.

use std::{fs, io, path::PathBuf};

use directories::BaseDirs;
use serde::Deserialize;
use thiserror::Error;

/// Name of the configuration file in the home directory.
pub const CONFIG_FILENAME: &str = ".docsift.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The config file could not be parsed.
    #[error("invalid config {path}: {message}")]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Reason reported by the TOML parser.
        message: String,
    },
}

/// Search defaults, overridable per-invocation by CLI flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Characters of context on each side of a match in snippets.
    pub preview_range: usize,
    /// Default maximum gap for interval matching.
    pub max_gap: usize,
    /// Characters of context used by the detail view.
    pub detail_range: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            preview_range: 30,
            max_gap: 30,
            detail_range: 200,
        }
    }
}

/// Path of the global config file, if a home directory exists.
pub fn config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Loads the configuration, falling back to defaults when no file exists.
pub fn load() -> Result<AppConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(&path)?;
    toml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.preview_range, 30);
        assert_eq!(config.max_gap, 30);
        assert_eq!(config.detail_range, 200);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("max_gap = 5").unwrap();
        assert_eq!(config.max_gap, 5);
        assert_eq!(config.preview_range, 30);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<AppConfig>("max_gpa = 5").is_err());
    }
}
