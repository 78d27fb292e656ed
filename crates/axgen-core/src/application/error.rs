//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Filesystem adapter state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter error")]
    AdapterLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::AdapterLockError => vec!["Try running the command again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
