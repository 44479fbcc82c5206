//! Backup job status detection
//!
//! A refresh cycle derives the outcome of the most recent backup job from
//! the tool's log directory:
//!
//! - [`locator`] picks the newest log file by modification time
//! - [`extractor`] scans that file's text for the success/failure markers
//!
//! [`resolve_status`] chains both and never fails: every error is logged and
//! collapses to [`BackupStatus::Unknown`], so the exported gauges always carry
//! a value.

pub mod error;
pub mod extractor;
pub mod locator;

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::LogsConfig;

pub use error::{Result, StatusError};
pub use extractor::{Markers, extract_status, scan_status};
pub use locator::{LogFile, find_latest_log};

/// Outcome of the most recent backup job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupStatus {
    Succeeded,
    Failed,
    #[default]
    Unknown,
}

impl BackupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupStatus::Succeeded => "succeeded",
            BackupStatus::Failed => "failed",
            BackupStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BackupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LogsConfig {
    pub fn markers(&self) -> Markers<'_> {
        Markers {
            success: &self.success_marker,
            failure: &self.failure_marker,
        }
    }
}

/// Locate the newest log and extract its status, propagating errors
pub fn detect_status(logs: &LogsConfig) -> Result<(LogFile, BackupStatus)> {
    let latest = find_latest_log(&logs.dir, &logs.extension)?;
    let status = extract_status(&latest.path, logs.markers())?;
    Ok((latest, status))
}

/// Fail-soft status resolution: errors are logged and reported as `Unknown`
pub fn resolve_status(logs: &LogsConfig) -> BackupStatus {
    let status = match detect_status(logs) {
        Ok((latest, status)) => {
            info!(file = %latest.path.display(), modified = %latest.modified, "Selected latest log file");
            status
        }
        Err(e @ StatusError::NoStatusFound { .. }) => {
            info!(error = %e, "Log file has no status marker");
            BackupStatus::Unknown
        }
        Err(e) => {
            warn!(error = %e, "Failed to determine backup status");
            BackupStatus::Unknown
        }
    };

    info!(status = %status, "Last backup status");
    status
}
