//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the post-copy steps.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file that should hold text did not decode as UTF-8.
    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },

    /// In-memory filesystem lock was poisoned.
    #[error("Filesystem lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check file permissions".into(),
                "Re-run once fixed; completed steps are skipped".into(),
            ],
            Self::NotUtf8 { path } => vec![
                format!("{} contains non-UTF-8 bytes", path.display()),
                "Re-save the file as UTF-8 and re-run".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::NotUtf8 { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_names_path() {
        let err = ApplicationError::FilesystemError {
            path: PathBuf::from("pyproject.toml"),
            reason: "Failed to write file: permission denied".into(),
        };
        assert!(err.to_string().contains("pyproject.toml"));
        assert!(err.suggestions()[0].contains("pyproject.toml"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
