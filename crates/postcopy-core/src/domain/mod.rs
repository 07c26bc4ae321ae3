//! Core domain layer for postcopy.
//!
//! Pure text transforms with no I/O. Everything that touches the disk goes
//! through the ports in `crate::application`.
//!
//! - [`pyproject`]: the `pyproject.toml` rules, one [`PyprojectRule`] each
//! - [`init_module`]: the `__init__.py` version-import splice
//! - [`obsolete`]: the fixed list of generator files to delete

pub mod error;
pub mod init_module;
pub mod obsolete;
pub mod pyproject;
pub mod value_objects;

pub use error::{DomainError, ErrorCategory};
pub use init_module::{VERSION_MARKER, inject_version_import, version_import_block};
pub use obsolete::{OBSOLETE_FILES, obsolete_files};
pub use pyproject::{PyprojectRewrite, PyprojectRule, rewrite_pyproject};
pub use value_objects::ModuleName;
