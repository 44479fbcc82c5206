use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

use super::{error::ApiError, models::HealthResponse, state::AppState};

/// Prometheus scrape endpoint (GET /metrics)
///
/// Answers from the already-published gauge values; never touches the
/// filesystem or waits on the refresher.
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state.metrics.encode()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        body,
    ))
}

/// Liveness probe (GET /health)
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok",
        backup_status: state.metrics.snapshot().status(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
