use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{
    services::{health, metrics},
    state::AppState,
};
use crate::config::Config;
use crate::observability::Metrics;
use crate::worker::Refresher;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Build the HTTP router over shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics))
        .route("/health", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the refresher and serve `/metrics` until a shutdown signal arrives.
///
/// Failing to bind the listener is the only fatal runtime error.
pub async fn run(config: Config) -> Result<(), AnyError> {
    let metrics = Metrics::new().map_err(|e| format!("Failed to create metrics registry: {}", e))?;
    let address = config.server.bind_addr;
    let period = config.refresh.interval.as_duration();

    let state = AppState::new(config, metrics);
    let shutdown_token = CancellationToken::new();

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", address, e))?;
    info!(%address, "Backup exporter listening");

    let refresher = Refresher::new(
        Arc::new(state.config.logs.clone()),
        Arc::clone(&state.metrics),
        period,
        shutdown_token.clone(),
    );
    let refresher_handle = tokio::spawn(refresher.run());

    let app = router(state);

    let served = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    shutdown_token.cancel();
    if let Err(e) = refresher_handle.await {
        tracing::error!(error = %e, "Refresher task ended abnormally");
    }

    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
