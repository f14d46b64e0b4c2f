//! Local filesystem adapter using std::fs and walkdir.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use modkit_core::error::{ModkitError, ModkitResult};
use modkit_core::ports::Filesystem;

/// Production filesystem implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> ModkitResult<String> {
        std::fs::read_to_string(path).map_err(|e| file_access(path, e))
    }

    /// Write through a sibling temporary file and rename over the target,
    /// keeping the window for a torn write as small as the platform allows.
    fn write_file(&self, path: &Path, content: &str) -> ModkitResult<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| file_access(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| file_access(path, e))?;

        // Carry the target's permission bits over; a fresh temp file is
        // created private.
        if let Ok(meta) = std::fs::metadata(path) {
            let _ = std::fs::set_permissions(tmp.path(), meta.permissions());
        }

        tmp.persist(path)
            .map(|_| ())
            .map_err(|e| file_access(path, e.error))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn walk_files(&self, root: &Path, excluded: &[PathBuf]) -> ModkitResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            // Pruned at entry: descendants of an excluded directory are
            // never visited, and pruning one entry cannot affect its
            // siblings.
            .filter_entry(|e| !excluded.iter().any(|ex| e.path() == ex));

        for entry in walker {
            let entry = entry.map_err(|e| ModkitError::FileAccess {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf()),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// Recursively copy `src` into `dst`, skipping any directory whose path
/// equals an entry of `excluded`. Used by the production build to stage the
/// development tree.
pub fn copy_tree(src: &Path, dst: &Path, excluded: &[PathBuf]) -> ModkitResult<()> {
    let walker = WalkDir::new(src)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !excluded.iter().any(|ex| e.path() == ex));

    for entry in walker {
        let entry = entry.map_err(|e| ModkitError::FileAccess {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| src.to_path_buf()),
            reason: e.to_string(),
        })?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walk entries live under the walk root");
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| file_access(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| file_access(parent, e))?;
            }
            std::fs::copy(entry.path(), &target).map_err(|e| file_access(&target, e))?;
        }
    }
    Ok(())
}

fn file_access(path: &Path, e: std::io::Error) -> ModkitError {
    ModkitError::FileAccess {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
