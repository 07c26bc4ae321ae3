// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The rewrite rules themselves never fail: a pattern that does not match is
/// a no-op. The only domain failure is a caller handing us a module name we
/// cannot safely use as a path component or interpolate into TOML.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModuleName { name, reason } => vec![
                format!("Module name '{}' is invalid: {}", name, reason),
                "Pass the Python package name, not a path".into(),
                "Example: postcopy my_extension".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModuleName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_module_name_is_validation() {
        let err = DomainError::InvalidModuleName {
            name: "a/b".into(),
            reason: "contains a path separator",
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("a/b"));
        assert!(err.suggestions().iter().any(|s| s.contains("postcopy")));
    }
}
