//! Dependency manifest regeneration and test-runner list maintenance.
//!
//! Two independent refresh steps, both idempotent for an unchanged tree:
//! the module-dependency manifest is regenerated by the library's external
//! dependency writer, and the test-runner document's bounded file list is
//! rebuilt from a live scan of the source directory.

use std::path::Path;

use regex::Regex;
use tracing::{debug, info, instrument};

use crate::config::ResolvedConfig;
use crate::error::{ModkitError, ModkitResult};
use crate::markers::{self, TEST_FILES_TOKEN};
use crate::paths;
use crate::ports::{Filesystem, ToolRunner};

/// Scans the source tree and keeps generated dependency artifacts current.
pub struct DependencyScanner<'a> {
    fs: &'a dyn Filesystem,
    runner: &'a dyn ToolRunner,
}

impl<'a> DependencyScanner<'a> {
    pub fn new(fs: &'a dyn Filesystem, runner: &'a dyn ToolRunner) -> Self {
        Self { fs, runner }
    }

    /// Regenerate the module-dependency manifest.
    ///
    /// Pure orchestration: the external dependency writer does the actual
    /// source parsing. The writer requires its root and URL prefix joined
    /// into a single `--root_with_prefix` value — it rejects them as
    /// separate quoted words — so the embedded space is preserved inside
    /// one argv element and no shell is involved.
    #[instrument(skip_all)]
    pub fn refresh_manifest(&self, config: &ResolvedConfig) -> ModkitResult<()> {
        let js_source_dir = config.js_source_dir()?;
        let deps_manifest = config.deps_manifest()?;
        let deps_writer = config.deps_writer()?;

        let base_script = config.base_script()?;
        let base_dir = base_script.parent().unwrap_or_else(|| Path::new(""));
        let prefix = paths::url_path(&paths::relative_to(&js_source_dir, base_dir));

        let args = vec![
            deps_writer.display().to_string(),
            format!("--root_with_prefix={} {}", js_source_dir.display(), prefix),
            format!("--output_file={}", deps_manifest.display()),
        ];

        let output = self.runner.run("python", &args, config.project_root())?;
        if !output.success() {
            return Err(ModkitError::DependencyGenerationFailed {
                detail: output.stderr,
            });
        }

        debug!(manifest = %deps_manifest.display(), "dependency manifest updated");
        Ok(())
    }

    /// Rebuild the test-file list inside the test-runner document.
    ///
    /// A project without a test runner is legal: the step silently no-ops.
    /// Returns the number of discovered test files otherwise.
    #[instrument(skip_all)]
    pub fn refresh_test_runner(&self, config: &ResolvedConfig) -> ModkitResult<Option<usize>> {
        let runner_path = config.test_runner()?;
        if !self.fs.exists(&runner_path) {
            debug!(path = %runner_path.display(), "no test runner present, skipping");
            return Ok(None);
        }

        let runner_dir = runner_path.parent().unwrap_or_else(|| Path::new(""));
        let entries = self.collect_tests(config, runner_dir)?;

        let content = self.fs.read_to_string(&runner_path)?;
        let mut rewritten = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            if line.contains(TEST_FILES_TOKEN) {
                rewritten.push_str(markers::line_indent(line));
                rewritten.push_str(&render_test_list(&entries));
                rewritten.push_str(TEST_FILES_TOKEN);
                rewritten.push('\n');
            } else {
                rewritten.push_str(line);
            }
        }
        self.fs.write_file(&runner_path, &rewritten)?;

        info!(tests = entries.len(), runner = %runner_path.display(), "test runner updated");
        Ok(Some(entries.len()))
    }

    /// Walk the source directory for files matching the configured test
    /// pattern, relative to the runner's directory, in walk order.
    fn collect_tests(
        &self,
        config: &ResolvedConfig,
        runner_dir: &Path,
    ) -> ModkitResult<Vec<String>> {
        let pattern = config.test_file_pattern()?;
        let matcher = Regex::new(pattern).map_err(|e| ModkitError::InvalidConfigValue {
            section: "project".into(),
            key: "test_file_pattern".into(),
            reason: e.to_string(),
        })?;

        let js_source_dir = config.js_source_dir()?;
        let mut entries = Vec::new();
        for file in self.fs.walk_files(&js_source_dir, &[])? {
            let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if matcher.is_match(name) {
                debug!(path = %file.display(), "found test");
                entries.push(paths::url_path(&paths::relative_to(&file, runner_dir)));
            }
        }
        Ok(entries)
    }
}

/// Render the discovered entries as the runner's array-literal line body.
fn render_test_list(entries: &[String]) -> String {
    let quoted: Vec<String> = entries.iter().map(|e| format!("'{e}'")).collect();
    format!("var testFiles = [{}];", quoted.join(", "))
}
