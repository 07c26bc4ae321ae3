//! `<module>/__init__.py` version-import splice.

use crate::domain::value_objects::ModuleName;

/// Presence of this substring means the import was already added.
pub const VERSION_MARKER: &str = "_version";

const DOCSTRING_DELIMITERS: [&str; 2] = ["\"\"\"", "'''"];

/// The `try: from ._version import __version__` block for `module`.
///
/// Falls back to `"dev"` with a warning when the package was imported from a
/// source checkout where the build hook never generated `_version.py`.
pub fn version_import_block(module: &ModuleName) -> String {
    format!(
        "try:\n    \
         from ._version import __version__\n\
         except ImportError:\n    \
         import warnings\n    \
         warnings.warn(\"Importing '{module}' outside a proper installation.\")\n    \
         __version__ = \"dev\"\n"
    )
}

/// Splice the version import into an `__init__.py` body.
///
/// Returns `None` if `content` already carries [`VERSION_MARKER`]. A leading
/// docstring stays first; the block lands right after its closing quotes.
pub fn inject_version_import(content: &str, module: &ModuleName) -> Option<String> {
    if content.contains(VERSION_MARKER) {
        return None;
    }

    let block = version_import_block(module);
    let spliced = match docstring_end(content) {
        Some(end) => {
            let (head, tail) = content.split_at(end);
            format!("{head}\n\n{block}{tail}")
        }
        None => format!("{block}\n{content}"),
    };
    Some(spliced)
}

/// Byte offset just past the closing delimiter of a leading docstring.
fn docstring_end(content: &str) -> Option<usize> {
    let body = content.trim_start();
    let offset = content.len() - body.len();

    let delimiter = DOCSTRING_DELIMITERS
        .into_iter()
        .find(|d| body.starts_with(*d))?;
    let after_open = offset + delimiter.len();
    let close = content[after_open..].find(delimiter)?;

    Some(after_open + close + delimiter.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> ModuleName {
        ModuleName::new("my_extension").unwrap()
    }

    #[test]
    fn block_mentions_module_and_fallback() {
        let block = version_import_block(&module());
        assert_eq!(
            block,
            "try:\n    from ._version import __version__\nexcept ImportError:\n    import warnings\n    warnings.warn(\"Importing 'my_extension' outside a proper installation.\")\n    __version__ = \"dev\"\n"
        );
    }

    #[test]
    fn inserted_after_docstring() {
        let content = "\"\"\"My extension.\"\"\"\nfrom .handlers import setup_handlers\n";
        let out = inject_version_import(content, &module()).unwrap();
        let block = version_import_block(&module());
        assert_eq!(
            out,
            format!("\"\"\"My extension.\"\"\"\n\n{block}\nfrom .handlers import setup_handlers\n")
        );
    }

    #[test]
    fn code_after_docstring_is_byte_identical() {
        let code = "\n\ndef _jupyter_labextension_paths():\n    return [{\"src\": \"labextension\", \"dest\": \"my_extension\"}]\n";
        let content = format!("\"\"\"Multi\nline\ndocstring.\n\"\"\"{code}");
        let out = inject_version_import(&content, &module()).unwrap();
        assert!(out.starts_with("\"\"\"Multi\nline\ndocstring.\n\"\"\"\n\ntry:\n"));
        assert!(out.ends_with(code));
    }

    #[test]
    fn single_quoted_docstring_is_recognised() {
        let content = "'''Doc.'''\nx = 1\n";
        let out = inject_version_import(content, &module()).unwrap();
        assert!(out.starts_with("'''Doc.'''\n\ntry:\n"));
        assert!(out.ends_with("\"dev\"\n\nx = 1\n"));
    }

    #[test]
    fn leading_whitespace_before_docstring_is_kept() {
        let content = "\n\"\"\"Doc.\"\"\"\nx = 1\n";
        let out = inject_version_import(content, &module()).unwrap();
        assert!(out.starts_with("\n\"\"\"Doc.\"\"\"\n\ntry:\n"));
    }

    #[test]
    fn inserted_at_top_without_docstring() {
        let content = "from .handlers import setup_handlers\n";
        let out = inject_version_import(content, &module()).unwrap();
        assert_eq!(
            out,
            format!("{}\n{content}", version_import_block(&module()))
        );
    }

    #[test]
    fn docstring_not_at_start_is_ignored() {
        let content = "import os\n\"\"\"not a module docstring\"\"\"\n";
        let out = inject_version_import(content, &module()).unwrap();
        assert!(out.starts_with("try:\n"));
        assert!(out.ends_with(content));
    }

    #[test]
    fn unterminated_docstring_falls_back_to_top() {
        let content = "\"\"\"never closed\nx = 1\n";
        let out = inject_version_import(content, &module()).unwrap();
        assert!(out.starts_with("try:\n"));
        assert!(out.ends_with(content));
    }

    #[test]
    fn empty_file_gets_block() {
        let out = inject_version_import("", &module()).unwrap();
        assert_eq!(out, format!("{}\n", version_import_block(&module())));
    }

    #[test]
    fn marker_present_is_noop() {
        let content = "from ._version import __version__\n";
        assert!(inject_version_import(content, &module()).is_none());
    }

    #[test]
    fn second_injection_is_noop() {
        let once = inject_version_import("\"\"\"Doc.\"\"\"\n", &module()).unwrap();
        assert!(inject_version_import(&once, &module()).is_none());
    }
}
