//! Generator leftovers that do not belong in a hatch-vcs project.

use std::path::Path;

/// Paths, relative to the project root, removed after the rewrite.
///
/// `.nvmrc` and `setup.py` only served the nodejs-version build; the four
/// workflows drive jupyter-releaser, whose config sections are dropped too.
pub const OBSOLETE_FILES: [&str; 6] = [
    ".nvmrc",
    "setup.py",
    ".github/workflows/check-release.yml",
    ".github/workflows/prep-release.yml",
    ".github/workflows/publish-release.yml",
    ".github/workflows/enforce-label.yml",
];

/// [`OBSOLETE_FILES`] as paths.
pub fn obsolete_files() -> impl Iterator<Item = &'static Path> {
    OBSOLETE_FILES.into_iter().map(Path::new)
}
