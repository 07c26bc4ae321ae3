//! Error handling for the postcopy CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use postcopy_core::error::PostCopyError;

// Re-export so callers only need `use crate::error::*`.
pub use postcopy_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// The resolved configuration is unusable (e.g. `--directory` missing).
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `postcopy-core`.
    #[error("Post-copy failed: {0}")]
    Core(#[from] PostCopyError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing progress output failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
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
    /// Wrap an `anyhow` error from startup plumbing as a configuration error.
    pub fn config(err: anyhow::Error) -> Self {
        Self::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the path passed to -C / --directory".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout is writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
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
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
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
    /// User input error (bad module name).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcopy_core::application::ApplicationError;
    use postcopy_core::domain::ModuleName;
    use std::io;
    use std::path::PathBuf;

    fn invalid_name() -> CliError {
        CliError::Core(ModuleName::new("a/b").unwrap_err().into())
    }

    fn filesystem_failure() -> CliError {
        CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("pyproject.toml"),
                reason: "Failed to write file: permission denied".into(),
            }
            .into(),
        )
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(invalid_name().exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::config(anyhow::anyhow!("missing dir"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(filesystem_failure().exit_code(), 1);
        assert_eq!(
            CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "e")).exit_code(),
            1
        );
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn invalid_name_suggests_package_name() {
        assert!(
            invalid_name()
                .suggestions()
                .iter()
                .any(|s| s.contains("package name"))
        );
    }

    #[test]
    fn filesystem_failure_names_path() {
        assert!(
            filesystem_failure()
                .suggestions()
                .iter()
                .any(|s| s.contains("pyproject.toml"))
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = filesystem_failure().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let s = filesystem_failure().format_plain(true);
        assert!(s.contains("Caused by:"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn config_error_keeps_context_chain() {
        let err = CliError::config(
            anyhow::anyhow!("not found").context("cannot access project directory /x"),
        );
        assert!(err.to_string().contains("cannot access project directory /x"));
        assert!(err.to_string().contains("not found"));
    }
}
