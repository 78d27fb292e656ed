//! Domain errors: blueprint invariant violations.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("File '{path}' has no parent directory in the blueprint: '{parent}'")]
    MissingParentDirectory { path: String, parent: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBlueprint(msg) => vec![
                "Check the blueprint definition".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicatePath { path } => vec![
                format!("'{}' appears more than once in the path tables", path),
                "Remove the duplicate entry".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' is absolute; blueprint paths are relative to the project root", path),
            ],
            Self::MissingParentDirectory { path, parent } => vec![
                format!("'{}' expects directory '{}' which is never created", path, parent),
                "Check the directory table for a typo".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
