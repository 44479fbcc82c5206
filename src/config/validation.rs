use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("logs.extension must not be empty")]
    EmptyExtension,

    #[error("logs.{field} must not be empty")]
    EmptyMarker { field: &'static str },

    #[error("Success and failure markers are identical: '{marker}'")]
    IdenticalMarkers { marker: String },

    #[error("refresh.interval must be positive")]
    ZeroRefreshInterval,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_logs(config)?;
    validate_refresh(config)?;
    Ok(())
}

/// An empty marker would match every line, so both must be set and distinct
fn validate_logs(config: &Config) -> Result<(), ValidationError> {
    let logs = &config.logs;

    if logs.extension.is_empty() {
        return Err(ValidationError::EmptyExtension);
    }

    if logs.success_marker.is_empty() {
        return Err(ValidationError::EmptyMarker {
            field: "success_marker",
        });
    }

    if logs.failure_marker.is_empty() {
        return Err(ValidationError::EmptyMarker {
            field: "failure_marker",
        });
    }

    if logs.success_marker == logs.failure_marker {
        return Err(ValidationError::IdenticalMarkers {
            marker: logs.success_marker.clone(),
        });
    }

    Ok(())
}

fn validate_refresh(config: &Config) -> Result<(), ValidationError> {
    if config.refresh.interval.is_zero() {
        return Err(ValidationError::ZeroRefreshInterval);
    }
    Ok(())
}
