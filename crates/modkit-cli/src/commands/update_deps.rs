//! `modkit update-deps` — regenerate the dependency manifest and refresh
//! the test-runner file list.

use std::path::Path;

use modkit_adapters::{LocalFilesystem, ProcessRunner};
use modkit_core::deps::DependencyScanner;

use crate::error::CliResult;
use crate::output::OutputManager;

/// Refresh the module-dependency manifest, then the test runner.
///
/// Manifest failure aborts before the test runner is touched.
pub fn execute(install_root: &Path, output: &OutputManager) -> CliResult<()> {
    let (_ws, config) = super::load_config(install_root)?;

    let fs = LocalFilesystem::new();
    let runner = ProcessRunner::new();
    let scanner = DependencyScanner::new(&fs, &runner);

    scanner.refresh_manifest(&config)?;
    output.print(&format!(
        "Regenerated {}",
        config.deps_manifest()?.display()
    ))?;

    match scanner.refresh_test_runner(&config)? {
        Some(count) => output.print(&format!("Listed {count} test file(s) in the test runner"))?,
        None => output.info("No test runner present, skipped")?,
    }

    output.success("Updated dependencies")?;
    Ok(())
}
