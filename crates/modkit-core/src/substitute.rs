//! The marker-substitution engine.
//!
//! Walks a development tree, rewrites every registered marker occurrence in
//! every eligible file in place, and leaves all other content byte-exact.
//! Vendored library/compiler directories are pruned from the walk — their
//! contents are downloaded artifacts that would be clobbered on the next
//! fetch if touched.

use std::path::Path;

use tracing::{debug, instrument};

use crate::config::ResolvedConfig;
use crate::error::ModkitResult;
use crate::markers;
use crate::ports::Filesystem;

/// File extensions eligible for substitution.
pub const TARGET_EXTENSIONS: &[&str] = &["html", "xhtml", "js", "css"];

/// Outcome counters for one substitution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Eligible files that were read and written back.
    pub files_processed: usize,
    /// Lines that carried at least one marker.
    pub lines_rewritten: usize,
}

/// Rewrites marker lines across a directory tree.
pub struct SubstitutionEngine<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> SubstitutionEngine<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Apply every registered marker to every eligible file under `root`.
    ///
    /// The library root and compiler root are excluded at directory-entry
    /// time, so their descendants are never opened. Any error aborts the
    /// pass; files already rewritten stay rewritten.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn apply_all(&self, root: &Path, config: &ResolvedConfig) -> ModkitResult<ApplyStats> {
        let excluded = [config.library_root()?, config.compiler_root()?];

        let mut stats = ApplyStats::default();
        for file in self.fs.walk_files(root, &excluded)? {
            if !is_eligible(&file) {
                continue;
            }
            stats.lines_rewritten += self.apply_file(&file, config)?;
            stats.files_processed += 1;
        }
        Ok(stats)
    }

    /// Rewrite a single file, returning how many lines carried markers.
    ///
    /// The whole file is accumulated and written back in one write, so a
    /// marker-free file round-trips byte-for-byte.
    pub fn apply_file(&self, path: &Path, config: &ResolvedConfig) -> ModkitResult<usize> {
        let content = self.fs.read_to_string(path)?;

        let mut rewritten = String::with_capacity(content.len());
        let mut hits = 0;
        for line in content.split_inclusive('\n') {
            match markers::rewrite_line(line, config, path)? {
                Some(new_line) => {
                    debug!(marker_line = line.trim_end(), path = %path.display(), "line replaced");
                    rewritten.push_str(&new_line);
                    hits += 1;
                }
                None => rewritten.push_str(line),
            }
        }

        self.fs.write_file(path, &rewritten)?;
        Ok(hits)
    }
}

fn is_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| TARGET_EXTENSIONS.contains(&ext))
}
