//! Exported backup status gauges

use prometheus::{Encoder, IntGauge, Registry, TextEncoder};

use crate::status::BackupStatus;

pub const SUCCEEDED_GAUGE: &str = "sql_backup_status_succeeded";
pub const FAILED_GAUGE: &str = "sql_backup_status_failed";

/// Owns the registry and the success/failure gauge pair.
///
/// The refresh loop is the only writer; scrapes only read. Each gauge write
/// is a single atomic store, so no further locking is needed.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    succeeded: IntGauge,
    failed: IntGauge,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let succeeded = IntGauge::new(SUCCEEDED_GAUGE, "SQL Backup job success status")?;
        let failed = IntGauge::new(FAILED_GAUGE, "SQL Backup job failure status")?;

        registry.register(Box::new(succeeded.clone()))?;
        registry.register(Box::new(failed.clone()))?;

        Ok(Self {
            registry,
            succeeded,
            failed,
        })
    }

    /// Overwrite both gauges from `status`; `Unknown` leaves both at 0
    pub fn publish(&self, status: BackupStatus) {
        self.succeeded
            .set(i64::from(status == BackupStatus::Succeeded));
        self.failed.set(i64::from(status == BackupStatus::Failed));
        tracing::debug!(%status, "Backup status gauges updated");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            succeeded: self.succeeded.get(),
            failed: self.failed.get(),
        }
    }

    /// Render the registry in the Prometheus text exposition format
    pub fn encode(&self) -> prometheus::Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub succeeded: i64,
    pub failed: i64,
}

impl MetricsSnapshot {
    pub fn status(&self) -> BackupStatus {
        match (self.succeeded, self.failed) {
            (1, 0) => BackupStatus::Succeeded,
            (0, 1) => BackupStatus::Failed,
            _ => BackupStatus::Unknown,
        }
    }
}
