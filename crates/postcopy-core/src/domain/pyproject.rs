//! `pyproject.toml` rewrite rules.
//!
//! Switches a JupyterLab-extension project from `hatch-nodejs-version` to
//! `hatch-vcs`. Each [`PyprojectRule`] is a best-effort substitution over the
//! whole document: if its pattern is absent the text passes through
//! untouched. Rules run in the order of [`PyprojectRule::ALL`].
//!
//! Every rule is idempotent on its own output. The two substitutions
//! (build requirement, version source) get that for free because the old
//! form stops matching once replaced; the two insertions check for their
//! own output before inserting.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use tracing::{debug, instrument};

use crate::domain::value_objects::ModuleName;

// ── Literals ──────────────────────────────────────────────────────────────────

const VCS_REQUIREMENT: &str = r#""hatch-vcs>=0.4.0""#;
const VCS_VERSION_SOURCE: &str = "[tool.hatch.version]\nsource = \"vcs\"";
const LOCAL_SCHEME_MARKER: &str = "local_scheme";
const LOCAL_SCHEME_SECTION: &str =
    "[tool.hatch.version.raw-options]\nlocal_scheme = \"no-local-version\"";
const VERSION_HOOK_MARKER: &str = "tool.hatch.build.hooks.version";
const JUPYTER_BUILDER_HOOK: &str = "[tool.hatch.build.hooks.jupyter-builder]";
const RELEASER_OPTIONS: &str = "[tool.jupyter-releaser.options]";
const RELEASER_HOOKS: &str = "[tool.jupyter-releaser.hooks]";
const PYTHON_FLOOR: &str = r#"requires-python = ">=3.10""#;

// ── Patterns ──────────────────────────────────────────────────────────────────

static NODEJS_REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""hatch-nodejs-version>=\d+(?:\.\d+)*""#).expect("Invalid regex pattern")
});
static NODEJS_VERSION_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[tool\.hatch\.version\]\nsource = "nodejs""#).expect("Invalid regex pattern")
});
static VCS_VERSION_SOURCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&regex::escape(VCS_VERSION_SOURCE)).expect("Invalid regex pattern")
});
static RELEASER_OPTIONS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section_pattern(RELEASER_OPTIONS));
static RELEASER_HOOKS_SECTION: LazyLock<Regex> = LazyLock::new(|| section_pattern(RELEASER_HOOKS));
static REQUIRES_PYTHON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"requires-python = ">=3\.\d+""#).expect("Invalid regex pattern")
});
static LEGACY_CLASSIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*"Programming Language :: Python :: 3\.[89]",?[ \t]*\r?\n"#)
        .expect("Invalid regex pattern")
});
// Four newlines in a row means three blank lines.
static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{4,}").expect("Invalid regex pattern"));

/// A whole TOML section: the header line, then every line that does not
/// open another section, stopping before the next `[` line or at the end.
///
/// Body lines are matched one at a time rather than with a lazy `.*?`, so a
/// `[` inside an array value never ends the section early.
fn section_pattern(header: &str) -> Regex {
    Regex::new(&format!(
        r"(?m)^{}[^\n]*(?:\n|\z)(?:(?:[^\[\n][^\n]*)?(?:\n|\z))*",
        regex::escape(header)
    ))
    .expect("Invalid regex pattern")
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// One substitution applied to `pyproject.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PyprojectRule {
    /// `"hatch-nodejs-version>=X.Y.Z"` → `"hatch-vcs>=0.4.0"`.
    ReplaceBuildRequirement,
    /// `[tool.hatch.version]` `source = "nodejs"` → `"vcs"`.
    SwitchVersionSource,
    /// Adds `[tool.hatch.version.raw-options]` with `local_scheme`.
    AddLocalScheme,
    /// Adds `[tool.hatch.build.hooks.version]` before the jupyter-builder hook.
    AddVersionHook,
    /// Drops `[tool.jupyter-releaser.options]`.
    DropReleaserOptions,
    /// Drops `[tool.jupyter-releaser.hooks]`.
    DropReleaserHooks,
    /// `requires-python` floor becomes `>=3.10`.
    RaisePythonFloor,
    /// Drops the Python 3.8 and 3.9 classifiers.
    DropLegacyClassifiers,
    /// Three or more blank lines become one.
    CollapseBlankLines,
}

impl PyprojectRule {
    /// Every rule, in application order.
    pub const ALL: [Self; 9] = [
        Self::ReplaceBuildRequirement,
        Self::SwitchVersionSource,
        Self::AddLocalScheme,
        Self::AddVersionHook,
        Self::DropReleaserOptions,
        Self::DropReleaserHooks,
        Self::RaisePythonFloor,
        Self::DropLegacyClassifiers,
        Self::CollapseBlankLines,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReplaceBuildRequirement => "replace-build-requirement",
            Self::SwitchVersionSource => "switch-version-source",
            Self::AddLocalScheme => "add-local-scheme",
            Self::AddVersionHook => "add-version-hook",
            Self::DropReleaserOptions => "drop-releaser-options",
            Self::DropReleaserHooks => "drop-releaser-hooks",
            Self::RaisePythonFloor => "raise-python-floor",
            Self::DropLegacyClassifiers => "drop-legacy-classifiers",
            Self::CollapseBlankLines => "collapse-blank-lines",
        }
    }

    /// Apply this rule to `content`.
    ///
    /// Returns `Cow::Borrowed` when the pattern is absent. An owned result
    /// may still equal the input (e.g. a floor that was already `>=3.10`).
    pub fn apply<'a>(self, content: &'a str, module: &ModuleName) -> Cow<'a, str> {
        match self {
            Self::ReplaceBuildRequirement => {
                NODEJS_REQUIREMENT.replace_all(content, NoExpand(VCS_REQUIREMENT))
            }
            Self::SwitchVersionSource => {
                NODEJS_VERSION_SOURCE.replace_all(content, NoExpand(VCS_VERSION_SOURCE))
            }
            Self::AddLocalScheme => {
                if content.contains(LOCAL_SCHEME_MARKER) {
                    return Cow::Borrowed(content);
                }
                VCS_VERSION_SOURCE_PATTERN.replace_all(content, |caps: &Captures| {
                    format!("{}\n\n{LOCAL_SCHEME_SECTION}", &caps[0])
                })
            }
            Self::AddVersionHook => {
                // No anchor, no hook: silently left alone.
                if content.contains(VERSION_HOOK_MARKER) || !content.contains(JUPYTER_BUILDER_HOOK)
                {
                    return Cow::Borrowed(content);
                }
                let hook = format!(
                    "[tool.hatch.build.hooks.version]\npath = \"{}\"\n\n{JUPYTER_BUILDER_HOOK}",
                    module.version_file()
                );
                Cow::Owned(content.replace(JUPYTER_BUILDER_HOOK, &hook))
            }
            Self::DropReleaserOptions => RELEASER_OPTIONS_SECTION.replace_all(content, ""),
            Self::DropReleaserHooks => RELEASER_HOOKS_SECTION.replace_all(content, ""),
            Self::RaisePythonFloor => REQUIRES_PYTHON.replace_all(content, NoExpand(PYTHON_FLOOR)),
            Self::DropLegacyClassifiers => LEGACY_CLASSIFIER.replace_all(content, ""),
            Self::CollapseBlankLines => BLANK_LINE_RUN.replace_all(content, "\n\n"),
        }
    }
}

impl fmt::Display for PyprojectRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rewrite ───────────────────────────────────────────────────────────────────

/// Result of running every [`PyprojectRule`] over a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyprojectRewrite {
    pub content: String,
    /// Rules that actually changed the text, in application order.
    pub applied: Vec<PyprojectRule>,
}

impl PyprojectRewrite {
    pub fn is_changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Run every rule over `content`.
///
/// Rules see LF line endings only. A CRLF document is rewritten as LF and
/// converted back, so inserted sections match the rest of the file.
#[instrument(skip_all, fields(module = %module))]
pub fn rewrite_pyproject(content: &str, module: &ModuleName) -> PyprojectRewrite {
    let crlf = content.contains("\r\n");
    let mut text = if crlf {
        content.replace("\r\n", "\n")
    } else {
        content.to_owned()
    };
    let mut applied = Vec::new();

    for rule in PyprojectRule::ALL {
        let changed = match rule.apply(&text, module) {
            Cow::Owned(next) if next != text => Some(next),
            _ => None,
        };
        if let Some(next) = changed {
            debug!(rule = %rule, "pyproject rule applied");
            text = next;
            applied.push(rule);
        }
    }

    if crlf {
        text = text.replace('\n', "\r\n");
    }

    PyprojectRewrite {
        content: text,
        applied,
    }
}
