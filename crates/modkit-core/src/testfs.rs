//! Minimal in-memory [`Filesystem`] fake for the core's own unit tests.
//!
//! The adapters crate ships the full-featured `MemoryFilesystem`; this one
//! exists so core tests need no dependency on the adapters crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ModkitError, ModkitResult};
use crate::ports::Filesystem;

#[derive(Debug, Default)]
pub struct TestFs {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl TestFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.to_owned());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.read().unwrap().get(path.as_ref()).cloned()
    }
}

impl Filesystem for TestFs {
    fn read_to_string(&self, path: &Path) -> ModkitResult<String> {
        self.get(path).ok_or_else(|| ModkitError::FileAccess {
            path: path.to_path_buf(),
            reason: "no such file".into(),
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> ModkitResult<()> {
        self.put(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap();
        files.contains_key(path) || files.keys().any(|p| p.starts_with(path))
    }

    fn walk_files(&self, root: &Path, excluded: &[PathBuf]) -> ModkitResult<Vec<PathBuf>> {
        Ok(self
            .files
            .read()
            .unwrap()
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| !excluded.iter().any(|ex| p.starts_with(ex)))
            .cloned()
            .collect())
    }
}
