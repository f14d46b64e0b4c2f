//! The built-in project template.
//!
//! `modkit init` materializes this file table into a target directory. The
//! markup files carry unresolved marker tokens; a later `apply-config` pass
//! turns them into real references once the library is in place. The
//! project configuration file is deliberately sparse — everything it omits
//! resolves from the user and default layers.

use std::path::Path;

use tracing::debug;

use modkit_core::error::{ModkitError, ModkitResult};

/// One file of the built-in template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Forward-slash path relative to the project root.
    pub path: &'static str,
    pub content: &'static str,
}

/// The template file table, in materialization order.
pub const PROJECT_TEMPLATE: &[TemplateFile] = &[
    TemplateFile {
        path: "modkit.toml",
        content: "\
# Project configuration. Keys omitted here fall back to your user
# configuration (~/.modkit.toml) and the installation defaults.

[project]
main_namespace = \"app.Main\"
",
    },
    TemplateFile {
        path: "development/index.html",
        content: "\
<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>modkit application</title>
    <!--@base_js@-->
    <!--@deps_js@-->
    <script>
      goog.require('app.Main');
    </script>
  </head>
  <body onload=\"app.Main();\">
  </body>
</html>
",
    },
    TemplateFile {
        path: "development/js_dev/main.js",
        content: "\
goog.provide('app.Main');

/**
 * Application entry point.
 */
app.Main = function() {
};
",
    },
    TemplateFile {
        path: "development/js_dev/main_test.js",
        content: "\
goog.require('app.Main');
goog.require('goog.testing.jsunit');

function testMainIsCallable() {
  app.Main();
}
",
    },
    TemplateFile {
        path: "development/all_tests.html",
        content: "\
<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>All tests</title>
    <!--@multitestrunner_css@-->
    <!--@base_js@-->
    <!--@deps_js@-->
    <script>
      var testFiles = [];/*@test_files@*/
    </script>
    <script>
      goog.require('goog.testing.MultiTestRunner');
    </script>
  </head>
  <body>
    <div id=\"runner\"></div>
    <script>
      var runner = new goog.testing.MultiTestRunner().setAllTests(testFiles);
      runner.render(document.getElementById('runner'));
      runner.start();
    </script>
  </body>
</html>
",
    },
];

/// Top-level names the template will create, for conflict detection.
fn top_level_entries() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PROJECT_TEMPLATE
        .iter()
        .map(|f| f.path.split('/').next().expect("non-empty template path"))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Write the template into `target_dir`.
///
/// Fails with [`ModkitError::ConflictedFiles`] — before writing anything —
/// if any top-level template entry already exists in the target.
pub fn materialize(target_dir: &Path) -> ModkitResult<()> {
    let conflicted: Vec<String> = top_level_entries()
        .into_iter()
        .filter(|name| target_dir.join(name).exists())
        .map(str::to_owned)
        .collect();
    if !conflicted.is_empty() {
        return Err(ModkitError::ConflictedFiles { files: conflicted });
    }

    for file in PROJECT_TEMPLATE {
        let path = target_dir.join(file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ModkitError::FileAccess {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        std::fs::write(&path, file.content).map_err(|e| ModkitError::FileAccess {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "template file written");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn template_markers_are_present_for_apply_config() {
        let index = PROJECT_TEMPLATE
            .iter()
            .find(|f| f.path == "development/index.html")
            .unwrap();
        assert!(index.content.contains("<!--@base_js@-->"));
        assert!(index.content.contains("<!--@deps_js@-->"));

        let runner = PROJECT_TEMPLATE
            .iter()
            .find(|f| f.path == "development/all_tests.html")
            .unwrap();
        assert!(runner.content.contains("<!--@multitestrunner_css@-->"));
        assert!(runner.content.contains("/*@test_files@*/"));
    }

    #[test]
    fn materialize_writes_the_whole_table() {
        let dir = TempDir::new().unwrap();
        materialize(dir.path()).unwrap();

        for file in PROJECT_TEMPLATE {
            assert!(dir.path().join(file.path).is_file(), "{} missing", file.path);
        }
    }

    #[test]
    fn conflicts_abort_before_any_write() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("modkit.toml"), "existing").unwrap();

        let err = materialize(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ModkitError::ConflictedFiles { ref files } if files == &vec!["modkit.toml".to_owned()]
        ));
        // Nothing else was created.
        assert!(!dir.path().join("development").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("modkit.toml")).unwrap(),
            "existing"
        );
    }

    #[test]
    fn top_level_entries_are_deduplicated() {
        assert_eq!(top_level_entries(), vec!["development", "modkit.toml"]);
    }
}
