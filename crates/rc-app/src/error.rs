//! Error types for the rc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the lower crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write case file: {path}")]
    CaseFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<rc_project::ProjectError> for AppError {
    fn from(err: rc_project::ProjectError) -> Self {
        match err {
            rc_project::ProjectError::Validation(e) => e.into(),
            other => AppError::Case(other.to_string()),
        }
    }
}

impl From<rc_project::ValidationError> for AppError {
    fn from(err: rc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<rc_equipment::EquipmentError> for AppError {
    fn from(err: rc_equipment::EquipmentError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<rc_perf::PerfError> for AppError {
    fn from(err: rc_perf::PerfError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<rc_core::UnitError> for AppError {
    fn from(err: rc_core::UnitError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
