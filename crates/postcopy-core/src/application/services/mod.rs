//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports; the rules themselves
//! live in `crate::domain`.

pub mod post_copy_service;

pub use post_copy_service::{InitOutcome, PYPROJECT, PostCopyService, PyprojectOutcome};
