//! Layered configuration.
//!
//! A command resolves its configuration from up to three sectioned
//! key/value documents, merged per key with the precedence
//! `project > user > default`. The merge result is a [`ResolvedConfig`],
//! built once per command invocation and borrowed read-only by the engines
//! for the rest of the run.
//!
//! Parsing the on-disk documents is an adapter concern
//! (`modkit_adapters::config_loader`); this module only models the merged
//! view and its typed accessors.

use std::collections::BTreeMap;
use std::path::PathBuf;

mod resolved;

pub use resolved::ResolvedConfig;

/// Which layer a configuration document belongs to.
///
/// Ordering is precedence: earlier layers win for every key they define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceKind {
    /// The project's own `modkit.toml` (highest precedence).
    Project,
    /// The per-user dotfile.
    User,
    /// The installation-wide defaults (lowest precedence).
    Default,
}

impl SourceKind {
    /// Stable display name, used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::User => "user",
            Self::Default => "default",
        }
    }
}

/// One sectioned key/value document contributing to the merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSource {
    kind: SourceKind,
    origin: PathBuf,
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigSource {
    /// Create an empty source for the given layer.
    pub fn new(kind: SourceKind, origin: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            sections: BTreeMap::new(),
        }
    }

    /// Insert a value, creating the section on demand.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_owned())
            .or_default()
            .insert(key.to_owned(), value.into());
    }

    /// Look up a single key in this source only.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// The layer this document belongs to.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The file this document was loaded from.
    pub fn origin(&self) -> &PathBuf {
        &self.origin
    }
}
