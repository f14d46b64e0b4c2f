//! Driven ports — implemented by infrastructure.
//!
//! These traits define what the engines need from the outside world. The
//! `modkit-adapters` crate provides the production implementations.

use std::path::{Path, PathBuf};

use crate::error::ModkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modkit_adapters::filesystem::LocalFilesystem` (production)
/// - `modkit_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> ModkitResult<String>;

    /// Replace a file's content in one write.
    fn write_file(&self, path: &Path, content: &str) -> ModkitResult<()>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Recursively list the files under `root`, in a deterministic order.
    ///
    /// Contract: a directory whose path equals an entry of `excluded` is
    /// never entered — none of its descendants appear in the result, and
    /// excluding one directory must not affect the traversal of its
    /// siblings (two adjacent excluded directories are both skipped).
    fn walk_files(&self, root: &Path, excluded: &[PathBuf]) -> ModkitResult<Vec<PathBuf>>;
}

/// Captured outcome of an external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit code; -1 when terminated without one.
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// `true` when the tool exited with status zero.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Port for invoking external tools.
///
/// Implemented by `modkit_adapters::process::ProcessRunner`. Arguments are
/// passed as an argv array — never through a shell — so an argument may
/// legitimately contain whitespace (see the dependency scanner's pre-joined
/// `--root_with_prefix` element).
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, blocking until exit with both
    /// output streams fully drained.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> ModkitResult<ToolOutput>;
}
