//! Command handlers. One module per subcommand, each exposing a single
//! `execute` function; shared workspace/config plumbing lives here.

use std::path::Path;

use modkit_core::config::ResolvedConfig;

use crate::error::CliResult;
use crate::workspace::Workspace;

pub mod apply_config;
pub mod build;
pub mod completions;
pub mod download;
pub mod init;
pub mod update_deps;

/// Discover the enclosing project from the current directory and resolve
/// its configuration. Every command except `init` and `completions` starts
/// here.
fn load_config(install_root: &Path) -> CliResult<(Workspace, ResolvedConfig)> {
    let cwd = std::env::current_dir()?;
    let ws = Workspace::discover(&cwd, install_root)?;
    let config = modkit_adapters::config_loader::load(
        &ws.project_config,
        ws.user_config.as_deref(),
        &ws.default_config,
        &ws.project_root,
    )?;
    Ok((ws, config))
}
