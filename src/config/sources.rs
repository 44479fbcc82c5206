use super::models::Config;
use config::{ConfigError, Environment, File};
use std::env;
use std::path::PathBuf;

const CONFIG_ENV_VAR: &str = "BACKUP_EXPORTER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/backup_exporter.toml";
const ENV_PREFIX: &str = "BACKUP_EXPORTER";
const ENV_SEPARATOR: &str = "__";

/// Path of the configuration file: `BACKUP_EXPORTER_CONFIG` or the default location
fn default_config_path() -> PathBuf {
    env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load configuration from multiple sources with priority:
/// 1. Defaults (embedded in structs)
/// 2. TOML file (if exists)
/// 3. Environment variables from .env file (via dotenvy)
/// 4. System environment variables (highest priority)
pub fn load() -> Result<Config, ConfigError> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    load_from_sources(default_config_path())
}

/// Load configuration from a specific path and the process environment
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    load_with_environment(config_path, environment())
}

/// BACKUP_EXPORTER__LOGS__DIR -> logs.dir
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn load_with_environment(
    config_path: PathBuf,
    environment: Environment,
) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if config_path.exists() {
        tracing::info!("Loading configuration from: {}", config_path.display());
        builder = builder.add_source(File::from(config_path).required(false));
    } else {
        tracing::warn!(
            "Configuration file not found at {}, using defaults and environment overrides",
            config_path.display()
        );
    }

    builder = builder.add_source(environment);

    let config = builder.build()?;
    config.try_deserialize()
}
