//! The marker registry and single-line rewriting.
//!
//! A marker is a literal token embedded in generated markup, stylesheet, or
//! script comments. Rewriting a marked line replaces everything between the
//! indentation and the token with a freshly computed body; the token itself
//! is always preserved, which is what makes repeated passes idempotent.
//!
//! The registry is a `const` slice, not a map: when one line carries several
//! markers, each matching updater runs in registry order and the last one
//! applied terminates the line, so iteration order is part of the observable
//! contract.

use std::path::Path;

use crate::config::ResolvedConfig;
use crate::error::{ModkitError, ModkitResult};
use crate::paths;

/// Marker token for the library bootstrap script reference.
pub const BASE_SCRIPT_TOKEN: &str = "<!--@base_js@-->";
/// Marker token for the generated dependency-manifest reference.
pub const DEPS_MANIFEST_TOKEN: &str = "<!--@deps_js@-->";
/// Marker token for the multi-test runner stylesheet reference.
pub const MULTITESTRUNNER_CSS_TOKEN: &str = "<!--@multitestrunner_css@-->";
/// Marker token delimiting the test-file list in the test runner document.
///
/// Not part of [`REGISTRY`]: the list body comes from a source-tree scan,
/// not from configuration, so the dependency scanner owns this rewrite.
pub const TEST_FILES_TOKEN: &str = "/*@test_files@*/";

/// What a registered marker expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    BaseScript,
    DepsManifest,
    MultiTestRunnerStylesheet,
}

/// A literal token bound to its substitution function.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    token: &'static str,
    kind: MarkerKind,
}

/// The fixed marker registry, in stable iteration order.
pub const REGISTRY: &[Marker] = &[
    Marker {
        token: BASE_SCRIPT_TOKEN,
        kind: MarkerKind::BaseScript,
    },
    Marker {
        token: DEPS_MANIFEST_TOKEN,
        kind: MarkerKind::DepsManifest,
    },
    Marker {
        token: MULTITESTRUNNER_CSS_TOKEN,
        kind: MarkerKind::MultiTestRunnerStylesheet,
    },
];

impl Marker {
    /// The literal token text.
    pub fn token(&self) -> &'static str {
        self.token
    }

    /// Compute the replacement body for a file living in `file_dir`.
    ///
    /// The body depends only on the configuration and the directory, never
    /// on the previous line content.
    fn expand(&self, config: &ResolvedConfig, file_dir: &Path) -> ModkitResult<String> {
        match self.kind {
            MarkerKind::BaseScript => {
                let href = href_for(config.base_script()?, file_dir);
                Ok(format!("<script src=\"{href}\"></script>"))
            }
            MarkerKind::DepsManifest => {
                let src = href_for(config.deps_manifest()?, file_dir);
                Ok(format!("<script src=\"{src}\"></script>"))
            }
            MarkerKind::MultiTestRunnerStylesheet => {
                let href = href_for(config.multitestrunner_stylesheet()?, file_dir);
                Ok(format!("<link rel=\"stylesheet\" href=\"{href}\">"))
            }
        }
    }
}

fn href_for(target: std::path::PathBuf, file_dir: &Path) -> String {
    paths::url_path(&paths::relative_to(&target, file_dir))
}

/// Leading whitespace of a line, preserved verbatim on rewrite.
pub fn line_indent(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Rewrite one line against the registry.
///
/// Returns `Ok(None)` when no registered token occurs in the line. Each
/// token is tested against the *original* line text, so several markers on
/// one line each get their updater run; the last match in registry order
/// produces the surviving line. An updater failure aborts immediately as
/// [`ModkitError::SubstitutionFailed`] naming the file and marker.
pub fn rewrite_line(
    line: &str,
    config: &ResolvedConfig,
    file_path: &Path,
) -> ModkitResult<Option<String>> {
    let file_dir = file_path.parent().unwrap_or_else(|| Path::new(""));
    let mut rewritten = None;

    for marker in REGISTRY {
        if !line.contains(marker.token) {
            continue;
        }
        let body =
            marker
                .expand(config, file_dir)
                .map_err(|source| ModkitError::SubstitutionFailed {
                    path: file_path.to_path_buf(),
                    marker: marker.token.to_owned(),
                    source: Box::new(source),
                })?;
        rewritten = Some(format!("{}{}{}\n", line_indent(line), body, marker.token));
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSource, SourceKind};

    fn config() -> ResolvedConfig {
        let mut src = ConfigSource::new(SourceKind::Project, "modkit.toml");
        src.set("project", "development", "development");
        src.set("library", "root", "closure-library");
        src.set("compiler", "root", "closure-compiler");
        ResolvedConfig::from_sources(vec![src], "/proj")
    }

    #[test]
    fn base_script_marker_rewrites_with_indent_preserved() {
        let line = "    <!--@base_js@-->";
        let out = rewrite_line(line, &config(), Path::new("/proj/development/index.html"))
            .unwrap()
            .unwrap();
        assert_eq!(
            out,
            "    <script src=\"../closure-library/closure/goog/base.js\"></script><!--@base_js@-->\n"
        );
    }

    #[test]
    fn deps_manifest_marker_points_into_the_source_dir() {
        let line = "<!--@deps_js@-->";
        let out = rewrite_line(line, &config(), Path::new("/proj/development/index.html"))
            .unwrap()
            .unwrap();
        assert_eq!(
            out,
            "<script src=\"js_dev/deps.js\"></script><!--@deps_js@-->\n"
        );
    }

    #[test]
    fn stylesheet_marker_produces_a_link_tag() {
        let line = "  <!--@multitestrunner_css@-->";
        let out = rewrite_line(
            line,
            &config(),
            Path::new("/proj/development/all_tests.html"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            out,
            "  <link rel=\"stylesheet\" href=\"../closure-library/closure/goog/css/multitestrunner.css\"><!--@multitestrunner_css@-->\n"
        );
    }

    #[test]
    fn unknown_tokens_are_not_markers() {
        let line = "<!--@no_such_marker@-->";
        assert_eq!(
            rewrite_line(line, &config(), Path::new("/proj/development/index.html")).unwrap(),
            None
        );
    }

    #[test]
    fn rewriting_twice_is_idempotent() {
        let first = rewrite_line(
            "  stale content<!--@base_js@-->",
            &config(),
            Path::new("/proj/development/index.html"),
        )
        .unwrap()
        .unwrap();
        let second = rewrite_line(
            first.trim_end_matches('\n'),
            &config(),
            Path::new("/proj/development/index.html"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn last_marker_in_registry_order_terminates_a_multi_marker_line() {
        let line = "x<!--@base_js@--><!--@deps_js@-->";
        let out = rewrite_line(line, &config(), Path::new("/proj/development/index.html"))
            .unwrap()
            .unwrap();
        assert!(out.ends_with("<!--@deps_js@-->\n"));
        assert!(out.contains("js_dev/deps.js"));
        assert!(!out.contains("base.js"));
    }

    #[test]
    fn updater_failure_names_file_and_marker() {
        let empty = ResolvedConfig::from_sources(vec![], "/proj");
        let err = rewrite_line(
            "<!--@base_js@-->",
            &empty,
            Path::new("/proj/development/index.html"),
        )
        .unwrap_err();
        match err {
            ModkitError::SubstitutionFailed { path, marker, source } => {
                assert_eq!(path, Path::new("/proj/development/index.html"));
                assert_eq!(marker, BASE_SCRIPT_TOKEN);
                assert!(matches!(*source, ModkitError::MissingConfigKey { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn indent_is_the_leading_whitespace_only() {
        assert_eq!(line_indent("    x"), "    ");
        assert_eq!(line_indent("\t\tx"), "\t\t");
        assert_eq!(line_indent("x"), "");
        assert_eq!(line_indent("    "), "    ");
    }
}
