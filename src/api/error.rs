use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("metrics encoding failed: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Metrics(_) => "METRICS_ENCODING_FAILED",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Request failed");

        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ApiError::from(prometheus::Error::Msg("bad".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "METRICS_ENCODING_FAILED");
        assert!(err.to_string().contains("bad"));
    }
}
