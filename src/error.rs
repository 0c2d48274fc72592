//! Application-level error types.

use thiserror::Error;

/// Errors that can occur while preparing the application.
///
/// The panel itself has no fallible operations; only loading the optional
/// configuration file can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
