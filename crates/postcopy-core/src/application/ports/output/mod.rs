//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `postcopy-adapters` crate provides implementations.

use std::path::Path;

use crate::error::PostCopyResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `postcopy_adapters::filesystem::LocalFilesystem` (production)
/// - `postcopy_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Whole-file reads and writes only; callers never stream or patch in place.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read an entire file as UTF-8.
    fn read_to_string(&self, path: &Path) -> PostCopyResult<String>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> PostCopyResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> PostCopyResult<()>;
}
