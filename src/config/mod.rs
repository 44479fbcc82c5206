//! Configuration management for the backup exporter
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. A `.env` file in the working directory (via `dotenvy`)
//! 4. Process environment variables (highest priority)
//!
//! Variables from `.env` never override ones already set in the process
//! environment; both are read through the same `BACKUP_EXPORTER__*` source.
//!
//! # Usage
//!
//! ```no_run
//! use backup_exporter::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Watching: {}", config.logs.dir.display());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `BACKUP_EXPORTER__<section>__<key>`
//!
//! Examples:
//! - `BACKUP_EXPORTER__SERVER__BIND_ADDR=0.0.0.0:9100`
//! - `BACKUP_EXPORTER__LOGS__DIR=/var/log/backups`
//! - `BACKUP_EXPORTER__REFRESH__INTERVAL=30s`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/backup_exporter.toml`.
//! This can be overridden using the `BACKUP_EXPORTER_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use crate::humanize::HumanDuration;
pub use models::{Config, LogsConfig, RefreshConfig, ServerConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Process environment variables (`BACKUP_EXPORTER__*`)
    /// 2. Variables loaded from `.env`
    /// 3. TOML file (default: `config/backup_exporter.toml`)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path, still honouring `.env` and the environment
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the default location
    pub fn load_or_default_path(path: Option<std::path::PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[logs]
dir = "/data/backup-logs"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.logs.dir.to_str(), Some("/data/backup-logs"));
        assert_eq!(config.logs.extension, ".xml");
    }

    #[test]
    fn test_validation_catches_identical_markers() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[logs]
success_marker = "done"
failure_marker = "done"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::IdenticalMarkers { .. })
        ));
    }

    #[test]
    fn test_malformed_interval_is_load_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[refresh]
interval = "soon"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(result.unwrap_err(), ConfigError::LoadError(_)));
    }
}
