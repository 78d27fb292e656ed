//! Error handling for the Axgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use axgen_core::error::{AxgenError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `axgen-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] AxgenError),

    /// An I/O operation failed at the CLI layer (terminal writes).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("Failed to encode report: {message}")]
    ReportEncoding { message: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ReportEncoding { .. } => {
                vec!["This is a bug in axgen, please report it".into()]
            }
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::ReportEncoding { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            "\n{} {}\n\n  {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(output, "\n  {} {}\n", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {}", suggestion);
            }
        }

        if !verbose {
            let _ = write!(
                output,
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {}", self);

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (blueprint validation).
    UserError,
    /// Internal/system error (filesystem failures).
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axgen_core::application::ApplicationError;
    use std::io;
    use std::path::PathBuf;

    fn fs_error() -> CliError {
        CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("axon_backend/api"),
                reason: "permission denied".into(),
            }
            .into(),
        )
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_filesystem_failure_is_internal() {
        assert_eq!(fs_error().exit_code(), 1);
    }

    #[test]
    fn exit_code_domain_error_is_user() {
        use axgen_core::domain::DomainError;
        let err = CliError::Core(DomainError::InvalidBlueprint("empty".into()).into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_io_error_is_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn filesystem_error_suggests_permissions() {
        assert!(fs_error()
            .suggestions()
            .iter()
            .any(|s| s.contains("permissions")));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = fs_error().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = fs_error().format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
