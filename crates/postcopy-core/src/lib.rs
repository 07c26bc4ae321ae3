//! postcopy core - hexagonal architecture implementation
//!
//! Domain and application layers for the post-copy fixup that moves a
//! freshly generated JupyterLab extension from `hatch-nodejs-version` to
//! `hatch-vcs`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          postcopy-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (PostCopyService)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    postcopy-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (PyprojectRule, inject_version_import) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use postcopy_core::prelude::*;
//!
//! # fn run(filesystem: Box<dyn Filesystem>) -> PostCopyResult<()> {
//! let module = ModuleName::new("my_extension")?;
//! let service = PostCopyService::new(filesystem, ".");
//!
//! service.rewrite_pyproject(&module)?;
//! service.rewrite_init(&module)?;
//! service.remove_obsolete_files()?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitOutcome, PostCopyService, PyprojectOutcome, ports::Filesystem,
    };
    pub use crate::domain::{ModuleName, PyprojectRewrite, PyprojectRule, rewrite_pyproject};
    pub use crate::error::{PostCopyError, PostCopyResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
