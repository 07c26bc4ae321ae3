//! Domain value objects.
//!
//! # Design
//!
//! [`ModuleName`] is the one input the whole run is driven by. It is used
//! twice: as a path component (`<module>/__init__.py`) and as text spliced
//! into generated TOML and Python. Both uses are only safe for a bounded
//! alphabet, so the invariant is enforced once, at construction.

use crate::domain::error::DomainError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ── ModuleName ───────────────────────────────────────────────────────────────

/// The Python package name of the generated project.
///
/// Invariant: non-empty, no path separators, no leading `.`, no `"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Fallible constructor.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else if name.contains('"') {
            Some("name cannot contain '\"'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidModuleName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<module>/__init__.py`, relative to the project root.
    pub fn init_path(&self) -> PathBuf {
        PathBuf::from(&self.0).join("__init__.py")
    }

    /// `<module>/_version.py` as written into the hatch version hook.
    ///
    /// Always uses `/` since it ends up inside `pyproject.toml`, not on disk.
    pub fn version_file(&self) -> String {
        format!("{}/_version.py", self.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
