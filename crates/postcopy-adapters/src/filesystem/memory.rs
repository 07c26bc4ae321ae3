//! In-memory filesystem adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use postcopy_core::{
    application::{ApplicationError, ports::Filesystem},
    error::PostCopyResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same files, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        if let Ok(mut files) = self.inner.write() {
            files.insert(path.into(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let files = self.inner.read().ok()?;
        files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(files) = self.inner.read() else {
            return Vec::new();
        };
        let mut paths: Vec<_> = files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|files| files.contains_key(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> PostCopyResult<String> {
        let files = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> PostCopyResult<()> {
        let mut files = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> PostCopyResult<()> {
        let mut files = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        match files.remove(path) {
            Some(_) => Ok(()),
            None => Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()),
        }
    }
}
