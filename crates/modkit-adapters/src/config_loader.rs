//! Configuration document loading.
//!
//! Reads the three layered configuration documents and assembles the core's
//! [`ResolvedConfig`]. The on-disk carrier is TOML: each top-level table is
//! a section, each entry a scalar key/value.
//!
//! Layer semantics:
//! - project document — required; absent or unreadable is [`ModkitError::ConfigNotFound`]
//! - user document — optional; silently skipped when absent
//! - default document — required; it ships with the installation, so a
//!   missing file is an environment problem, not a user error

use std::path::Path;

use tracing::{debug, instrument};

use modkit_core::config::{ConfigSource, ResolvedConfig, SourceKind};
use modkit_core::error::{ModkitError, ModkitResult};

/// Load and merge the configuration layers.
///
/// `project_root` anchors every relative path accessor of the result; it is
/// normally the directory containing the project document.
#[instrument(skip_all, fields(project = %project_path.display()))]
pub fn load(
    project_path: &Path,
    user_path: Option<&Path>,
    default_path: &Path,
    project_root: &Path,
) -> ModkitResult<ResolvedConfig> {
    let mut sources = Vec::with_capacity(3);

    sources.push(read_source(SourceKind::Project, project_path)?);

    if let Some(user_path) = user_path {
        if user_path.is_file() {
            sources.push(read_source(SourceKind::User, user_path)?);
        } else {
            debug!(path = %user_path.display(), "no user configuration, skipping");
        }
    }

    sources.push(read_source(SourceKind::Default, default_path)?);

    Ok(ResolvedConfig::from_sources(sources, project_root))
}

/// Read one document into a [`ConfigSource`].
fn read_source(kind: SourceKind, path: &Path) -> ModkitResult<ConfigSource> {
    let text = std::fs::read_to_string(path).map_err(|_| ModkitError::ConfigNotFound {
        path: path.to_path_buf(),
    })?;

    let table: toml::Table = text.parse().map_err(|e: toml::de::Error| {
        ModkitError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    let mut source = ConfigSource::new(kind, path);
    for (section, value) in &table {
        let toml::Value::Table(entries) = value else {
            return Err(ModkitError::ConfigParse {
                path: path.to_path_buf(),
                reason: format!("top-level key '{section}' is not a section table"),
            });
        };
        for (key, value) in entries {
            source.set(section, key, scalar_to_string(section, key, value, path)?);
        }
    }

    debug!(layer = kind.label(), path = %path.display(), "configuration layer loaded");
    Ok(source)
}

fn scalar_to_string(
    section: &str,
    key: &str,
    value: &toml::Value,
    path: &Path,
) -> ModkitResult<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        _ => Err(ModkitError::ConfigParse {
            path: path.to_path_buf(),
            reason: format!("value of '{section}.{key}' is not a scalar"),
        }),
    }
}
