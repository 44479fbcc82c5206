use crate::humanize::HumanDuration;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

/// Where backup job logs live and how their outcome is recognised
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogsConfig {
    /// Directory scanned (non-recursively) for job logs
    #[serde(default = "default_logs_dir")]
    pub dir: PathBuf,
    /// File name suffix a log must end with (case-sensitive)
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_success_marker")]
    pub success_marker: String,
    #[serde(default = "default_failure_marker")]
    pub failure_marker: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            dir: default_logs_dir(),
            extension: default_extension(),
            success_marker: default_success_marker(),
            failure_marker: default_failure_marker(),
        }
    }
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from(r"C:\ProgramData\Key Metric Software\SQL Backup Master\logs")
}

fn default_extension() -> String {
    ".xml".to_string()
}

fn default_success_marker() -> String {
    "Backup job succeeded".to_string()
}

fn default_failure_marker() -> String {
    "Backup job failed".to_string()
}

/// Refresh loop configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    #[serde(default = "default_interval")]
    pub interval: HumanDuration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

fn default_interval() -> HumanDuration {
    HumanDuration::from_secs(10)
}
