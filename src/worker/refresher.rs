//! Periodic refresh of the backup status gauges

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::LogsConfig;
use crate::observability::Metrics;
use crate::status::{self, BackupStatus};

/// Drives Locator -> Extractor -> Publisher on a fixed interval.
pub struct Refresher {
    logs: Arc<LogsConfig>,
    metrics: Arc<Metrics>,
    period: Duration,
    shutdown_token: CancellationToken,
}

impl Refresher {
    pub fn new(
        logs: Arc<LogsConfig>,
        metrics: Arc<Metrics>,
        period: Duration,
        shutdown_token: CancellationToken,
    ) -> Self {
        Self {
            logs,
            metrics,
            period,
            shutdown_token,
        }
    }

    /// Run one cycle and publish its result.
    ///
    /// Filesystem access is blocking, so it runs on the blocking pool.
    pub async fn refresh_once(&self) -> BackupStatus {
        let logs = Arc::clone(&self.logs);
        let status = match tokio::task::spawn_blocking(move || status::resolve_status(&logs)).await {
            Ok(status) => status,
            Err(e) => {
                error!(error = %e, "Status resolution task failed");
                BackupStatus::Unknown
            }
        };

        self.metrics.publish(status);
        status
    }

    /// Refresh immediately, then once per period, until the token is cancelled.
    ///
    /// A slow cycle delays the next tick instead of triggering a burst.
    pub async fn run(self) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval = ?self.period, dir = %self.logs.dir.display(), "Backup status refresher started");

        loop {
            tokio::select! {
                _ = self.shutdown_token.cancelled() => {
                    debug!("Refresher received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    self.refresh_once().await;
                }
            }
        }

        info!("Backup status refresher stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn refresher(dir: &std::path::Path, token: CancellationToken) -> (Refresher, Arc<Metrics>) {
        let logs = Arc::new(LogsConfig {
            dir: dir.to_path_buf(),
            ..LogsConfig::default()
        });
        let metrics = Arc::new(Metrics::new().unwrap());
        let refresher = Refresher::new(logs, Arc::clone(&metrics), Duration::from_millis(20), token);
        (refresher, metrics)
    }

    #[tokio::test]
    async fn test_refresh_once_publishes_status() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("job.xml"), "Backup job failed\n").unwrap();

        let (refresher, metrics) = refresher(temp_dir.path(), CancellationToken::new());

        assert_eq!(refresher.refresh_once().await, BackupStatus::Failed);
        assert_eq!(metrics.snapshot().failed, 1);
        assert_eq!(metrics.snapshot().succeeded, 0);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("job.xml"), "Backup job succeeded\n").unwrap();

        let (refresher, metrics) = refresher(temp_dir.path(), CancellationToken::new());

        refresher.refresh_once().await;
        let first = metrics.snapshot();
        refresher.refresh_once().await;
        let second = metrics.snapshot();

        assert_eq!(first, second);
        assert_eq!(second.status(), BackupStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_run_refreshes_and_stops_on_cancel() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("job.xml"), "Backup job succeeded\n").unwrap();

        let token = CancellationToken::new();
        let (refresher, metrics) = refresher(temp_dir.path(), token.clone());

        let handle = tokio::spawn(refresher.run());

        // First tick fires immediately
        let mut published = false;
        for _ in 0..100 {
            if metrics.snapshot().status() == BackupStatus::Succeeded {
                published = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(published);

        // Later ticks pick up directory changes
        fs::write(temp_dir.path().join("job.xml"), "Backup job failed\n").unwrap();
        let mut updated = false;
        for _ in 0..100 {
            if metrics.snapshot().status() == BackupStatus::Failed {
                updated = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(updated);

        token.cancel();
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("refresher did not stop after cancellation")
            .unwrap();
    }
}
