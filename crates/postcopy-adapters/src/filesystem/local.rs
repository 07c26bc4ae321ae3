//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;

use postcopy_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{PostCopyError, PostCopyResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> PostCopyResult<String> {
        trace!(path = %path.display(), "read");
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => ApplicationError::NotUtf8 {
                path: path.to_path_buf(),
            }
            .into(),
            _ => map_io_error(path, e, "read file"),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> PostCopyResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn remove_file(&self, path: &Path) -> PostCopyResult<()> {
        trace!(path = %path.display(), "remove");
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PostCopyError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
