//! `modkit apply-config` — propagate configuration into marked lines.

use std::path::Path;

use modkit_adapters::LocalFilesystem;
use modkit_core::substitute::SubstitutionEngine;

use crate::error::CliResult;
use crate::output::OutputManager;

/// Rewrite every registered marker under the development directory.
pub fn execute(install_root: &Path, output: &OutputManager) -> CliResult<()> {
    let (_ws, config) = super::load_config(install_root)?;

    let fs = LocalFilesystem::new();
    let engine = SubstitutionEngine::new(&fs);
    let stats = engine.apply_all(&config.development_dir()?, &config)?;

    output.success(&format!(
        "Applied configuration: {} marker line(s) across {} file(s)",
        stats.lines_rewritten, stats.files_processed
    ))?;
    Ok(())
}
