//! `modkit init` — materialise the built-in project template.

use tracing::info;

use modkit_adapters::template;

use crate::cli::InitArgs;
use crate::error::CliResult;
use crate::output::OutputManager;

/// Create a new project skeleton in the target directory.
///
/// Existing files are never overwritten: any top-level conflict aborts the
/// command before a single file is written.
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    std::fs::create_dir_all(&args.dir)?;

    template::materialize(&args.dir)?;
    info!(dir = %args.dir.display(), "project initialised");

    output.success(&format!("Project created in {}", args.dir.display()))?;
    output.print("Next steps:")?;
    output.print("  modkit download      # fetch the library and compiler")?;
    output.print("  modkit apply-config  # wire generated references")?;

    Ok(())
}
