//! Error types for tm-output.

use thiserror::Error;

use tm_spatial::SpatialError;

/// Errors that can occur when building or writing a route report.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route has no waypoints")]
    EmptyRoute,

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
