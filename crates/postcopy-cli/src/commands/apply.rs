//! The post-copy run: the only thing `postcopy` does.
//!
//! Responsibility: build the core service, call each step in order, and
//! report. No rewrite logic lives here.

use tracing::{debug, info, instrument};

use postcopy_adapters::LocalFilesystem;
use postcopy_core::{
    application::{InitOutcome, PYPROJECT, PostCopyService, PyprojectOutcome},
    domain::ModuleName,
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Follow-up commands printed once the fixup is done.
pub const NEXT_STEPS: [&str; 2] = [
    "uv sync",
    "uv run jupyter labextension develop . --overwrite",
];

/// Execute a post-copy run.
///
/// Sequence:
/// 1. Validate the module name
/// 2. Rewrite `pyproject.toml` (warn and continue if missing)
/// 3. Add the `_version` import to `<module>/__init__.py`
/// 4. Delete obsolete generator files
/// 5. Print next-steps guidance
///
/// A filesystem error in any step stops the run there; earlier steps stay
/// applied and a re-run picks up where this one stopped.
#[instrument(skip_all, fields(module = %module_name))]
pub fn execute(module_name: &str, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let module = ModuleName::new(module_name).map_err(postcopy_core::error::PostCopyError::from)?;
    let dry_run = config.project.dry_run;

    let service = PostCopyService::new(Box::new(LocalFilesystem::new()), &config.project.root)
        .with_dry_run(dry_run);

    output.header(&format!("JupyterLab extension post-copy for: {module}"))?;
    if dry_run {
        output.info("Dry run: nothing will be written or deleted")?;
    }
    debug!(root = %config.project.root.display(), dry_run, "Run configured");

    // 1. pyproject.toml
    match service.rewrite_pyproject(&module)? {
        PyprojectOutcome::Rewritten { rules } => {
            let names: Vec<_> = rules.iter().map(|r| r.as_str()).collect();
            debug!(rules = ?names, "pyproject rules applied");
            output.success(&format!(
                "{} {PYPROJECT} ({} change{})",
                if dry_run { "Would modify" } else { "Modified" },
                rules.len(),
                if rules.len() == 1 { "" } else { "s" },
            ))?;
        }
        PyprojectOutcome::Unchanged => {
            output.info(&format!("{PYPROJECT}: nothing to change"))?;
        }
        PyprojectOutcome::Missing => {
            output.warning(&format!("WARNING: {PYPROJECT} not found!"))?;
        }
    }

    // 2. __init__.py
    output.print("Updating __init__.py...")?;
    let init_path = module.init_path();
    match service.rewrite_init(&module)? {
        InitOutcome::Rewritten => {
            output.success(&format!(
                "{} _version import to {}",
                if dry_run { "Would add" } else { "Added" },
                init_path.display()
            ))?;
        }
        InitOutcome::AlreadyVersioned => {
            output.info(&format!("{} already imports _version", init_path.display()))?;
        }
        // Many generated projects have no package dir yet.
        InitOutcome::Missing => {}
    }

    // 3. obsolete files
    output.print("Cleaning up incompatible files...")?;
    let removed = service.remove_obsolete_files()?;
    for path in &removed {
        output.print(&format!(
            "  {} {}",
            if dry_run { "Would delete" } else { "Deleted" },
            path.display()
        ))?;
    }

    info!(module = %module, removed = removed.len(), dry_run, "Post-copy completed");

    // 4. next steps
    output.success("Done! Next steps:")?;
    for step in NEXT_STEPS {
        output.print(&format!("  {step}"))?;
    }

    Ok(())
}
