//! Application error type shared across commands, services, and storage.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Infrastructure failures surfaced to the frontend as strings.
///
/// Validation outcomes are not `AppError`s; they live in
/// `services::validator::ValidationError` and never leave the widget state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}
