//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modkit_core::error::{ModkitError, ModkitResult};
use modkit_core::ports::Filesystem;

/// In-memory filesystem for tests: files in a path-ordered map, walks in
/// that order, same directory-exclusion contract as the local adapter.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (testing helper).
    pub fn insert(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .write()
            .expect("memory filesystem lock poisoned")
            .insert(path.into(), content.to_owned());
    }

    /// Read a file's content (testing helper).
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files
            .read()
            .expect("memory filesystem lock poisoned")
            .get(path)
            .cloned()
    }

    /// List all stored paths (testing helper).
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .expect("memory filesystem lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> ModkitResult<String> {
        self.content(path).ok_or_else(|| ModkitError::FileAccess {
            path: path.to_path_buf(),
            reason: "no such file".into(),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ModkitResult<()> {
        self.insert(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().expect("memory filesystem lock poisoned");
        files.contains_key(path) || files.keys().any(|p| p.starts_with(path))
    }

    fn walk_files(&self, root: &Path, excluded: &[PathBuf]) -> ModkitResult<Vec<PathBuf>> {
        Ok(self
            .files
            .read()
            .expect("memory filesystem lock poisoned")
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| !excluded.iter().any(|ex| p.starts_with(ex)))
            .cloned()
            .collect())
    }
}
