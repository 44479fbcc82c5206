use serde::Serialize;

use crate::status::BackupStatus;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Status derived from the currently published gauges
    pub backup_status: BackupStatus,
    pub version: String,
}
