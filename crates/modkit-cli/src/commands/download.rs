//! `modkit download` — fetch the vendored library and compiler.
//!
//! Pure orchestration over external tools: `git` clones the library,
//! `curl`/`unzip` fetch and unpack the compiler archive. modkit consumes
//! exit codes and stderr only. A root that already exists is left alone —
//! re-fetching would clobber local state.

use std::path::Path;

use tracing::info;

use modkit_adapters::ProcessRunner;
use modkit_core::config::ResolvedConfig;
use modkit_core::ports::ToolRunner;

use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub fn execute(install_root: &Path, output: &OutputManager) -> CliResult<()> {
    let (_ws, config) = super::load_config(install_root)?;
    let runner = ProcessRunner::new();

    download_library(&config, &runner, output)?;
    download_compiler(&config, &runner, output)?;

    output.success("Download complete")?;
    Ok(())
}

fn download_library(
    config: &ResolvedConfig,
    runner: &dyn ToolRunner,
    output: &OutputManager,
) -> CliResult<()> {
    let root = config.library_root()?;
    if root.exists() {
        output.warning(&format!(
            "Library already present at {}, skipping",
            root.display()
        ))?;
        return Ok(());
    }

    output.print("Downloading the library...")?;
    let out = runner.run(
        "git",
        &[
            "clone".into(),
            "--depth".into(),
            "1".into(),
            config.library_repository()?.to_owned(),
            root.display().to_string(),
        ],
        config.project_root(),
    )?;
    if !out.success() {
        return Err(CliError::ExternalCommandFailed {
            command: "git clone".into(),
            detail: out.stderr,
        });
    }
    info!(root = %root.display(), "library cloned");
    Ok(())
}

fn download_compiler(
    config: &ResolvedConfig,
    runner: &dyn ToolRunner,
    output: &OutputManager,
) -> CliResult<()> {
    let root = config.compiler_root()?;
    if root.exists() {
        output.warning(&format!(
            "Compiler already present at {}, skipping",
            root.display()
        ))?;
        return Ok(());
    }

    output.print("Downloading the compiler...")?;
    let staging = tempfile::tempdir()?;
    let archive = staging.path().join("compiler.zip");

    let fetched = runner.run(
        "curl",
        &[
            "-fsSL".into(),
            "-o".into(),
            archive.display().to_string(),
            config.compiler_zip_url()?.to_owned(),
        ],
        config.project_root(),
    )?;
    if !fetched.success() {
        return Err(CliError::ExternalCommandFailed {
            command: "curl".into(),
            detail: fetched.stderr,
        });
    }

    std::fs::create_dir_all(&root)?;
    let unpacked = runner.run(
        "unzip",
        &[
            "-oq".into(),
            archive.display().to_string(),
            "-d".into(),
            root.display().to_string(),
        ],
        config.project_root(),
    )?;
    if !unpacked.success() {
        return Err(CliError::ExternalCommandFailed {
            command: "unzip".into(),
            detail: unpacked.stderr,
        });
    }

    info!(root = %root.display(), "compiler unpacked");
    Ok(())
}
