//! Unified error handling for Axgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for Axgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum AxgenError {
    /// Errors from the domain layer (blueprint invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl AxgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type AxgenResult<T> = Result<T, AxgenError>;
