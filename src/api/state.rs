use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;

/// Process-lifetime context shared by the HTTP handlers and the refresher
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, metrics: Metrics) -> Self {
        Self {
            config: Arc::new(config),
            metrics: Arc::new(metrics),
        }
    }
}
