//! Application layer for postcopy.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PostCopyService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rewrite rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{InitOutcome, PYPROJECT, PostCopyService, PyprojectOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
