//! Application configuration.
//!
//! [`AppConfig`] is resolved once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! There is no config file: a post-copy run is a one-shot fixup and every
//! setting it has fits on the command line.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags
//! 2. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, ensure};

use crate::cli::Cli;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Which project to fix up, and how.
    pub project: ProjectConfig,
}

#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Directory `pyproject.toml` and friends are resolved against.
    pub root: PathBuf,
    pub dry_run: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project: ProjectConfig {
                root: PathBuf::from("."),
                dry_run: false,
            },
        }
    }
}

impl AppConfig {
    /// Resolve configuration: defaults, then CLI overrides.
    ///
    /// Fails if the project root is not an existing directory.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = &cli.directory {
            config.project.root = dir.clone();
        }
        config.project.dry_run = cli.dry_run;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let root: &Path = &self.project.root;
        let metadata = std::fs::metadata(root)
            .with_context(|| format!("cannot access project directory {}", root.display()))?;
        ensure!(
            metadata.is_dir(),
            "project directory {} is not a directory",
            root.display()
        );
        Ok(())
    }
}
