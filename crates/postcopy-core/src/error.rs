//! Unified error handling for postcopy-core.
//!
//! Wraps domain and application errors in one type, with a category and
//! user-actionable suggestions for the CLI to render.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for postcopy-core operations.
#[derive(Debug, Error, Clone)]
pub enum PostCopyError {
    /// Errors from the domain layer (bad input).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl PostCopyError {
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
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type PostCopyResult<T> = Result<T, PostCopyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModuleName;

    #[test]
    fn domain_errors_are_validation() {
        let err: PostCopyError = ModuleName::new("").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn application_errors_are_internal() {
        let err: PostCopyError = ApplicationError::LockPoisoned.into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
