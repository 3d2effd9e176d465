//! Runtime configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{LocationSource, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a rewind session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewindConfig {
    /// Initial move list order.
    #[serde(default)]
    sort_order: SortOrder,

    /// How move list entries compute their row and column.
    #[serde(default)]
    location_source: LocationSource,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            location_source: LocationSource::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl RewindConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(sort_order = %config.sort_order, location_source = %config.location_source, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when it does not exist.
    ///
    /// Only an implicit default path may be missing; an explicitly requested
    /// file that cannot be read is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, explicit: bool) -> Result<Self, ConfigError> {
        if !explicit && !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Returns a copy with the sort order replaced.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Returns a copy with the location source replaced.
    pub fn with_location_source(mut self, location_source: LocationSource) -> Self {
        self.location_source = location_source;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RewindConfig::from_toml_str("").unwrap();
        assert_eq!(config, RewindConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
    }

    #[test]
    fn test_missing_implicit_file_uses_defaults() {
        let config = RewindConfig::load("definitely/not/here/rewind.toml", false).unwrap();
        assert_eq!(config, RewindConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = RewindConfig::load("definitely/not/here/rewind.toml", true).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
