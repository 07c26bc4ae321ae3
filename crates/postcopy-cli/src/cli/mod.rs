//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "postcopy",
    bin_name = "postcopy",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Switch a freshly generated JupyterLab extension to hatch-vcs",
    long_about = "Post-processes a project generated from the JupyterLab extension \
                  template: moves pyproject.toml from hatch-nodejs-version to \
                  hatch-vcs, adds a _version import to the package __init__.py, \
                  and deletes files that only made sense for the old release flow.\n\n\
                  Safe to run more than once.",
    after_help = "EXAMPLES:\n\
        \x20 postcopy my_extension\n\
        \x20 postcopy my_extension --dry-run\n\
        \x20 postcopy -C ./my-extension my_extension -v",
)]
pub struct Cli {
    /// Presentation flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Python package name; `<MODULE_NAME>/__init__.py` is rewritten.
    #[arg(value_name = "MODULE_NAME", help = "Python package (module) name")]
    pub module_name: String,

    /// Project root the relative paths are resolved against.
    #[arg(
        short = 'C',
        long = "directory",
        value_name = "DIR",
        help = "Run as if started in DIR (default: current directory)"
    )]
    pub directory: Option<PathBuf>,

    /// Report what would change without writing or deleting anything.
    #[arg(long = "dry-run", help = "Show what would change without changing it")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
