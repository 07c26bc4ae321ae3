//! Post-copy service - the one use case.
//!
//! Runs the three file steps against a project root:
//! 1. Rewrite `pyproject.toml`
//! 2. Splice the version import into `<module>/__init__.py`
//! 3. Delete generator leftovers
//!
//! Steps are exposed separately so the caller can report progress between
//! them. None depends on another; a filesystem error aborts only the step it
//! occurs in and is returned to the caller as-is.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ModuleName, PyprojectRule, inject_version_import, obsolete_files, rewrite_pyproject},
    error::PostCopyResult,
};

/// File name of the configuration document, relative to the project root.
pub const PYPROJECT: &str = "pyproject.toml";

/// What happened to `pyproject.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PyprojectOutcome {
    /// No `pyproject.toml` under the root.
    Missing,
    /// Every rule was a no-op; the file was not rewritten.
    Unchanged,
    /// At least one rule fired (written unless in dry-run mode).
    Rewritten { rules: Vec<PyprojectRule> },
}

/// What happened to `<module>/__init__.py`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// No `__init__.py` for the module.
    Missing,
    /// Already imports from `_version`.
    AlreadyVersioned,
    /// Version import added (written unless in dry-run mode).
    Rewritten,
}

/// Main post-copy service.
pub struct PostCopyService {
    filesystem: Box<dyn Filesystem>,
    root: PathBuf,
    dry_run: bool,
}

impl PostCopyService {
    /// Create a service operating on the project at `root`.
    pub fn new(filesystem: Box<dyn Filesystem>, root: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            root: root.into(),
            dry_run: false,
        }
    }

    /// Compute every step but never write or delete.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Step 1: switch `pyproject.toml` to hatch-vcs.
    #[instrument(skip_all, fields(module = %module, root = %self.root.display()))]
    pub fn rewrite_pyproject(&self, module: &ModuleName) -> PostCopyResult<PyprojectOutcome> {
        let path = self.root.join(PYPROJECT);
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "pyproject.toml not found");
            return Ok(PyprojectOutcome::Missing);
        }

        let content = self.filesystem.read_to_string(&path)?;
        let rewrite = rewrite_pyproject(&content, module);
        if !rewrite.is_changed() {
            return Ok(PyprojectOutcome::Unchanged);
        }

        if !self.dry_run {
            self.filesystem.write_file(&path, &rewrite.content)?;
        }
        info!(
            path = %path.display(),
            rules = rewrite.applied.len(),
            dry_run = self.dry_run,
            "pyproject.toml rewritten"
        );

        Ok(PyprojectOutcome::Rewritten {
            rules: rewrite.applied,
        })
    }

    /// Step 2: add the `_version` import to the package entry point.
    #[instrument(skip_all, fields(module = %module, root = %self.root.display()))]
    pub fn rewrite_init(&self, module: &ModuleName) -> PostCopyResult<InitOutcome> {
        let path = self.root.join(module.init_path());
        if !self.filesystem.exists(&path) {
            debug!(path = %path.display(), "__init__.py not found");
            return Ok(InitOutcome::Missing);
        }

        let content = self.filesystem.read_to_string(&path)?;
        let Some(updated) = inject_version_import(&content, module) else {
            debug!(path = %path.display(), "version import already present");
            return Ok(InitOutcome::AlreadyVersioned);
        };

        if !self.dry_run {
            self.filesystem.write_file(&path, &updated)?;
        }
        info!(path = %path.display(), dry_run = self.dry_run, "__init__.py rewritten");

        Ok(InitOutcome::Rewritten)
    }

    /// Step 3: delete whichever obsolete generator files exist.
    ///
    /// Returns the removed paths, relative to the root, in list order.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn remove_obsolete_files(&self) -> PostCopyResult<Vec<PathBuf>> {
        let mut removed = Vec::new();

        for relative in obsolete_files() {
            let path = self.root.join(relative);
            if !self.filesystem.exists(&path) {
                continue;
            }
            if !self.dry_run {
                self.filesystem.remove_file(&path)?;
            }
            info!(path = %relative.display(), dry_run = self.dry_run, "Obsolete file removed");
            removed.push(relative.to_path_buf());
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::OBSOLETE_FILES;
    use crate::error::PostCopyError;
    use mockall::predicate::eq;

    fn module() -> ModuleName {
        ModuleName::new("my_extension").unwrap()
    }

    fn root() -> PathBuf {
        PathBuf::from("/project")
    }

    fn service(fs: MockFilesystem) -> PostCopyService {
        PostCopyService::new(Box::new(fs), root())
    }

    // ── pyproject ─────────────────────────────────────────────────────────

    #[test]
    fn missing_pyproject_is_reported_not_read() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(root().join(PYPROJECT)))
            .return_const(false);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let outcome = service(fs).rewrite_pyproject(&module()).unwrap();
        assert_eq!(outcome, PyprojectOutcome::Missing);
    }

    #[test]
    fn pyproject_is_rewritten_in_full() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("requires-python = \">=3.8\"\n".to_string()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/project/pyproject.toml")
                    && content == "requires-python = \">=3.10\"\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = service(fs).rewrite_pyproject(&module()).unwrap();
        assert_eq!(
            outcome,
            PyprojectOutcome::Rewritten {
                rules: vec![PyprojectRule::RaisePythonFloor]
            }
        );
    }

    #[test]
    fn unchanged_pyproject_is_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("[project]\nname = \"x\"\n".to_string()));
        fs.expect_write_file().never();

        let outcome = service(fs).rewrite_pyproject(&module()).unwrap();
        assert_eq!(outcome, PyprojectOutcome::Unchanged);
    }

    #[test]
    fn dry_run_does_not_write_pyproject() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("requires-python = \">=3.8\"\n".to_string()));
        fs.expect_write_file().never();

        let outcome = service(fs)
            .with_dry_run(true)
            .rewrite_pyproject(&module())
            .unwrap();
        assert!(matches!(outcome, PyprojectOutcome::Rewritten { .. }));
    }

    #[test]
    fn read_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to read file: permission denied".into(),
            }
            .into())
        });

        let err = service(fs).rewrite_pyproject(&module()).unwrap_err();
        assert!(matches!(
            err,
            PostCopyError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    // ── __init__.py ───────────────────────────────────────────────────────

    #[test]
    fn missing_init_is_silent_noop() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(root().join("my_extension").join("__init__.py")))
            .return_const(false);
        fs.expect_write_file().never();

        assert_eq!(
            service(fs).rewrite_init(&module()).unwrap(),
            InitOutcome::Missing
        );
    }

    #[test]
    fn versioned_init_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("from ._version import __version__\n".to_string()));
        fs.expect_write_file().never();

        assert_eq!(
            service(fs).rewrite_init(&module()).unwrap(),
            InitOutcome::AlreadyVersioned
        );
    }

    #[test]
    fn init_gets_version_import() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("\"\"\"Doc.\"\"\"\n".to_string()));
        fs.expect_write_file()
            .withf(|_, content| {
                content.starts_with("\"\"\"Doc.\"\"\"\n\ntry:\n")
                    && content.contains("'my_extension'")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        assert_eq!(
            service(fs).rewrite_init(&module()).unwrap(),
            InitOutcome::Rewritten
        );
    }

    // ── obsolete files ────────────────────────────────────────────────────

    #[test]
    fn only_existing_obsolete_files_are_removed() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|path| {
            path == Path::new("/project/.nvmrc")
                || path == Path::new("/project/.github/workflows/prep-release.yml")
        });
        fs.expect_remove_file().times(2).returning(|_| Ok(()));

        let removed = service(fs).remove_obsolete_files().unwrap();
        assert_eq!(
            removed,
            vec![
                PathBuf::from(".nvmrc"),
                PathBuf::from(".github/workflows/prep-release.yml"),
            ]
        );
    }

    #[test]
    fn nothing_to_remove_is_ok() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .times(OBSOLETE_FILES.len())
            .return_const(false);
        fs.expect_remove_file().never();

        assert!(service(fs).remove_obsolete_files().unwrap().is_empty());
    }

    #[test]
    fn dry_run_reports_but_keeps_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_file().never();

        let removed = service(fs)
            .with_dry_run(true)
            .remove_obsolete_files()
            .unwrap();
        assert_eq!(removed.len(), OBSOLETE_FILES.len());
    }

    #[test]
    fn remove_failure_stops_the_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_file().times(1).returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to remove file: busy".into(),
            }
            .into())
        });

        assert!(service(fs).remove_obsolete_files().is_err());
    }
}
