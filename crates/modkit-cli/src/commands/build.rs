//! `modkit build` — assemble and compile the production tree.
//!
//! Stages the development tree into the production directory (vendored
//! roots pruned), strips the generated dependency manifest, hands the
//! module tree to the external builder, and finally removes the raw module
//! sources from production — only the compiled script ships.

use std::path::Path;

use tracing::{debug, info};

use modkit_adapters::filesystem::copy_tree;
use modkit_adapters::ProcessRunner;
use modkit_core::ports::ToolRunner;

use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

pub fn execute(install_root: &Path, output: &OutputManager) -> CliResult<()> {
    let (_ws, config) = super::load_config(install_root)?;

    let development = config.development_dir()?;
    let production = config.production_dir()?;

    // Start from a clean production tree.
    if production.exists() {
        std::fs::remove_dir_all(&production)?;
    }
    copy_tree(
        &development,
        &production,
        &[config.library_root()?, config.compiler_root()?],
    )?;
    debug!(production = %production.display(), "production tree staged");

    let js_dir = production.join("js_dev");
    let staged_manifest = js_dir.join("deps.js");
    if staged_manifest.exists() {
        std::fs::remove_file(&staged_manifest)?;
    }

    let compiled = production.join(config.compiled_script()?);
    output.print("Compiling...")?;
    let runner = ProcessRunner::new();
    let out = runner.run(
        "python",
        &[
            config.builder()?.display().to_string(),
            format!("--root={}", config.library_root()?.display()),
            format!("--root={}", js_dir.display()),
            "-n".into(),
            config.main_namespace()?.to_owned(),
            "-o".into(),
            "compiled".into(),
            "-c".into(),
            config.compiler_jar()?.display().to_string(),
            format!(
                "--compiler_flags=--compilation_level={}",
                config.compilation_level()?
            ),
            format!("--output_file={}", compiled.display()),
        ],
        config.project_root(),
    )?;
    if !out.success() {
        return Err(CliError::ExternalCommandFailed {
            command: "closurebuilder".into(),
            detail: out.stderr,
        });
    }

    // Raw modules do not ship; the compiled script replaces them.
    if js_dir.exists() {
        std::fs::remove_dir_all(&js_dir)?;
    }

    info!(output = %compiled.display(), "build finished");
    output.success(&format!("Built {}", compiled.display()))?;
    Ok(())
}
