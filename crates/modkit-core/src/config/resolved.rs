//! The merged configuration view and its typed accessors.

use std::path::{Path, PathBuf};

use crate::config::{ConfigSource, SourceKind};
use crate::error::{ModkitError, ModkitResult};

/// The authoritative configuration for one command invocation.
///
/// Holds the contributing [`ConfigSource`]s in precedence order; every
/// lookup walks them front to back and the first source defining the key
/// wins. Override is per-key — a sparse project file shadows individual
/// keys without hiding the rest of a section.
///
/// Path accessors join relative values onto the project root, so callers
/// always receive paths that are meaningful from any working directory.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    sources: Vec<ConfigSource>,
    project_root: PathBuf,
}

impl ResolvedConfig {
    /// Build the merged view.
    ///
    /// Sources may be supplied in any order; they are sorted into precedence
    /// order (`project`, `user`, `default`) here so lookups never have to
    /// re-check layering.
    pub fn from_sources(mut sources: Vec<ConfigSource>, project_root: impl Into<PathBuf>) -> Self {
        sources.sort_by_key(|s| s.kind());
        Self {
            sources,
            project_root: project_root.into(),
        }
    }

    /// The directory containing the project configuration file.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// First-wins lookup across the layered sources.
    pub fn value(&self, section: &str, key: &str) -> ModkitResult<&str> {
        self.sources
            .iter()
            .find_map(|s| s.get(section, key))
            .ok_or_else(|| ModkitError::MissingConfigKey {
                section: section.to_owned(),
                key: key.to_owned(),
            })
    }

    /// Which layer a key resolves from, if any. Diagnostic helper.
    pub fn resolving_layer(&self, section: &str, key: &str) -> Option<SourceKind> {
        self.sources
            .iter()
            .find(|s| s.get(section, key).is_some())
            .map(|s| s.kind())
    }

    fn path_value(&self, section: &str, key: &str) -> ModkitResult<PathBuf> {
        Ok(self.project_root.join(self.value(section, key)?))
    }

    // ── [project] ─────────────────────────────────────────────────────────

    /// Directory holding the editable development tree.
    pub fn development_dir(&self) -> ModkitResult<PathBuf> {
        self.path_value("project", "development")
    }

    /// Directory the production build is assembled into.
    pub fn production_dir(&self) -> ModkitResult<PathBuf> {
        self.path_value("project", "production")
    }

    /// Entry-point namespace handed to the builder.
    pub fn main_namespace(&self) -> ModkitResult<&str> {
        self.value("project", "main_namespace")
    }

    /// File name of the compiled production script.
    pub fn compiled_script(&self) -> ModkitResult<&str> {
        self.value("project", "compiled_js")
    }

    /// Regular-expression source matched against candidate test file names.
    pub fn test_file_pattern(&self) -> ModkitResult<&str> {
        self.value("project", "test_file_pattern")
    }

    // ── [library] ─────────────────────────────────────────────────────────

    /// Directory holding the vendored library checkout.
    pub fn library_root(&self) -> ModkitResult<PathBuf> {
        self.path_value("library", "root")
    }

    /// Repository URL the library is cloned from.
    pub fn library_repository(&self) -> ModkitResult<&str> {
        self.value("library", "repository")
    }

    // ── [compiler] ────────────────────────────────────────────────────────

    /// Directory holding the vendored compiler.
    pub fn compiler_root(&self) -> ModkitResult<PathBuf> {
        self.path_value("compiler", "root")
    }

    /// Archive URL the compiler is downloaded from.
    pub fn compiler_zip_url(&self) -> ModkitResult<&str> {
        self.value("compiler", "zip_url")
    }

    /// Optimization level forwarded to the compiler.
    pub fn compilation_level(&self) -> ModkitResult<&str> {
        self.value("compiler", "compilation_level")
    }

    // ── Derived paths (fixed subpaths of the above) ───────────────────────

    /// Directory the project's own modules live in.
    pub fn js_source_dir(&self) -> ModkitResult<PathBuf> {
        Ok(self.development_dir()?.join("js_dev"))
    }

    /// The generated module-dependency manifest.
    pub fn deps_manifest(&self) -> ModkitResult<PathBuf> {
        Ok(self.js_source_dir()?.join("deps.js"))
    }

    /// The multi-test runner document, if the project keeps one.
    pub fn test_runner(&self) -> ModkitResult<PathBuf> {
        Ok(self.development_dir()?.join("all_tests.html"))
    }

    /// The library's bootstrap script.
    pub fn base_script(&self) -> ModkitResult<PathBuf> {
        Ok(self
            .library_root()?
            .join("closure")
            .join("goog")
            .join("base.js"))
    }

    /// Stylesheet for the library's multi-test runner page.
    pub fn multitestrunner_stylesheet(&self) -> ModkitResult<PathBuf> {
        Ok(self
            .library_root()?
            .join("closure")
            .join("goog")
            .join("css")
            .join("multitestrunner.css"))
    }

    /// The library's dependency-writer tool.
    pub fn deps_writer(&self) -> ModkitResult<PathBuf> {
        Ok(self
            .library_root()?
            .join("closure")
            .join("bin")
            .join("build")
            .join("depswriter.py"))
    }

    /// The library's build orchestrator tool.
    pub fn builder(&self) -> ModkitResult<PathBuf> {
        Ok(self
            .library_root()?
            .join("closure")
            .join("bin")
            .join("build")
            .join("closurebuilder.py"))
    }

    /// The compiler archive's jar.
    pub fn compiler_jar(&self) -> ModkitResult<PathBuf> {
        Ok(self.compiler_root()?.join("compiler.jar"))
    }
}
