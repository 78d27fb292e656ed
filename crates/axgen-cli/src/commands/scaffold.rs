//! Implementation of the scaffold command.
//!
//! Responsibility: wire the built-in blueprint into the core scaffold
//! service and display results. No scaffolding logic lives here.

use std::path::Path;

use tracing::{info, instrument};

use axgen_adapters::{builtin, LocalFilesystem};
use axgen_core::application::{ScaffoldReport, ScaffoldService};
use axgen_core::domain::Blueprint;

use crate::{
    cli::{GlobalArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the scaffold.
///
/// Dispatch sequence:
/// 1. Assemble the built-in blueprint and the local filesystem adapter
/// 2. Apply the blueprint via `ScaffoldService`
/// 3. Print per-item creation lines (or the JSON report)
/// 4. Print completion banner and next-steps guidance
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let blueprint = builtin::axon_backend();
    let filesystem = Box::new(LocalFilesystem::new());
    let service = ScaffoldService::new(filesystem);

    let json_mode = output.format() == OutputFormat::Json;

    if !json_mode {
        output.header("Starting project scaffolding...")?;
    }
    info!(root = %blueprint.root().display(), "Scaffold started");

    let report = service.apply(&blueprint).map_err(CliError::Core)?;

    info!(created = report.created_count(), "Scaffold completed");

    if json_mode {
        let doc =
            serde_json::to_string_pretty(&report).map_err(|e| CliError::ReportEncoding {
                message: e.to_string(),
            })?;
        output.print(&doc)?;
        return Ok(());
    }

    show_report(&blueprint, &report, &output)?;

    if !global.quiet {
        show_next_steps(&blueprint, &output)?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_report(
    blueprint: &Blueprint,
    report: &ScaffoldReport,
    out: &OutputManager,
) -> CliResult<()> {
    for path in &report.created_directories {
        out.success(&format!("Created directory: {}/", path.display()))?;
    }
    for path in &report.created_markers {
        let parent = path.parent().unwrap_or(Path::new("."));
        out.success(&format!(
            "Created {} in: {}/",
            blueprint.package_marker(),
            parent.display()
        ))?;
    }
    for path in &report.created_files {
        out.success(&format!("Created file: {}", path.display()))?;
    }
    for path in &report.mismatched {
        out.warning(&format!(
            "Existing file differs from placeholder (left untouched): {}",
            path.display()
        ))?;
    }

    out.print("")?;
    if report.is_noop() {
        out.info(&format!(
            "Nothing to do: '{}' is already in place",
            blueprint.root().display()
        ))?;
    } else {
        out.success(&format!(
            "Project structure for '{}' created successfully!",
            blueprint.root().display()
        ))?;
    }

    Ok(())
}

fn show_next_steps(blueprint: &Blueprint, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.print("Next steps:")?;
    out.print(&format!("  1. cd {}", blueprint.root().display()))?;
    out.print("  2. Create a virtual environment: python -m venv .venv")?;
    out.print("  3. Activate it: source .venv/bin/activate (or .\\.venv\\Scripts\\activate on Windows)")?;
    out.print("  4. Install dependencies: pip install -r requirements.txt")?;
    out.print("  5. Start coding!")?;
    Ok(())
}
