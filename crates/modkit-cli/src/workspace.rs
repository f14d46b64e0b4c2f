//! Workspace discovery: where the project, user, and default configuration
//! documents live.
//!
//! The installation root comes from `MODKIT_HOME` (read once in `main` and
//! passed down as a value — nothing below this layer touches the process
//! environment) with the executable's grandparent directory as the
//! fallback, matching the conventional `<root>/bin/modkit` install layout.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CliError, CliResult};

/// File name of the project configuration document (also the project-root
/// sentinel).
pub const PROJECT_CONFIG: &str = "modkit.toml";
/// File name of the per-user configuration document, in the home directory.
pub const USER_CONFIG: &str = ".modkit.toml";
/// Default configuration document, relative to the installation root.
pub const DEFAULT_CONFIG: &str = "config/default.toml";

/// The three configuration document locations for one invocation.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Directory containing the project configuration.
    pub project_root: PathBuf,
    pub project_config: PathBuf,
    /// Absent when no home directory could be determined.
    pub user_config: Option<PathBuf>,
    pub default_config: PathBuf,
}

impl Workspace {
    /// Locate the enclosing project by walking up from `start` until a
    /// directory containing [`PROJECT_CONFIG`] is found.
    pub fn discover(start: &Path, install_root: &Path) -> CliResult<Self> {
        let project_root = find_project_root(start).ok_or(CliError::ProjectRootNotFound {
            start: start.to_path_buf(),
        })?;
        debug!(root = %project_root.display(), "project root found");

        Ok(Self {
            project_config: project_root.join(PROJECT_CONFIG),
            user_config: user_config_path(),
            default_config: install_root.join(DEFAULT_CONFIG),
            project_root,
        })
    }
}

fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(PROJECT_CONFIG).is_file() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

fn user_config_path() -> Option<PathBuf> {
    directories::UserDirs::new().map(|dirs| dirs.home_dir().join(USER_CONFIG))
}

/// Resolve the installation root.
///
/// `env_home` is the value of `MODKIT_HOME`, captured by `main`. Without it
/// the root is derived from the running executable: `<root>/bin/modkit`
/// yields `<root>`.
pub fn install_root(env_home: Option<&str>) -> CliResult<PathBuf> {
    if let Some(home) = env_home {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    let exe = std::env::current_exe().map_err(|e| CliError::ConfigError {
        message: format!("cannot locate the modkit executable: {e}"),
    })?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| CliError::ConfigError {
            message: "cannot derive the installation root; set MODKIT_HOME".into(),
        })
}
