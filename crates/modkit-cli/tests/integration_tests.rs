//! Integration tests for the modkit binary.
//!
//! Each test gets its own temp project and its own fake installation root
//! (`MODKIT_HOME`) carrying a default configuration, so nothing depends on
//! the host machine.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DEFAULT_CONFIG: &str = r#"
[project]
development = "development"
production = "production"
compiled_js = "script.min.js"
test_file_pattern = "_test\\.js$"

[library]
root = "closure-library"
repository = "https://example.invalid/library.git"

[compiler]
root = "closure-compiler"
zip_url = "https://example.invalid/compiler.zip"
compilation_level = "ADVANCED_OPTIMIZATIONS"
"#;

/// Create a fake installation root with a default configuration.
fn install_root() -> TempDir {
    let home = TempDir::new().unwrap();
    fs::create_dir_all(home.path().join("config")).unwrap();
    fs::write(home.path().join("config/default.toml"), DEFAULT_CONFIG).unwrap();
    home
}

fn modkit(cwd: &Path, home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modkit").unwrap();
    cmd.current_dir(cwd).env("MODKIT_HOME", home);
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    Command::cargo_bin("modkit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply-config"))
        .stdout(predicate::str::contains("update-deps"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    Command::cargo_bin("modkit").unwrap().assert().code(2);
}

#[test]
fn init_creates_the_project_skeleton() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project created"));

    assert!(dir.path().join("modkit.toml").is_file());
    assert!(dir.path().join("development/index.html").is_file());
    assert!(dir.path().join("development/js_dev/main.js").is_file());
    assert!(dir.path().join("development/all_tests.html").is_file());
}

#[test]
fn init_refuses_to_overwrite_existing_files() {
    let dir = TempDir::new().unwrap();
    let home = install_root();
    fs::write(dir.path().join("modkit.toml"), "existing").unwrap();

    modkit(dir.path(), home.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Conflicted files"))
        .stderr(predicate::str::contains("modkit.toml"));

    // Untouched.
    assert_eq!(
        fs::read_to_string(dir.path().join("modkit.toml")).unwrap(),
        "existing"
    );
}

#[test]
fn apply_config_rewrites_generated_references() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path()).arg("init").assert().success();
    modkit(dir.path(), home.path())
        .arg("apply-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied configuration"));

    let index = fs::read_to_string(dir.path().join("development/index.html")).unwrap();
    assert!(index.contains(
        "<script src=\"../closure-library/closure/goog/base.js\"></script><!--@base_js@-->"
    ));
    assert!(index.contains("<script src=\"js_dev/deps.js\"></script><!--@deps_js@-->"));

    let runner = fs::read_to_string(dir.path().join("development/all_tests.html")).unwrap();
    assert!(runner.contains(
        "<link rel=\"stylesheet\" href=\"../closure-library/closure/goog/css/multitestrunner.css\"><!--@multitestrunner_css@-->"
    ));
}

#[test]
fn apply_config_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path()).arg("init").assert().success();
    modkit(dir.path(), home.path())
        .arg("apply-config")
        .assert()
        .success();
    let first = fs::read(dir.path().join("development/index.html")).unwrap();

    modkit(dir.path(), home.path())
        .arg("apply-config")
        .assert()
        .success();
    let second = fs::read(dir.path().join("development/index.html")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn project_layer_overrides_the_default_development_dir() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    fs::write(
        dir.path().join("modkit.toml"),
        "[project]\ndevelopment = \"web\"\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("web")).unwrap();
    fs::write(dir.path().join("web/page.html"), "  <!--@base_js@-->\n").unwrap();

    modkit(dir.path(), home.path())
        .arg("apply-config")
        .assert()
        .success();

    let page = fs::read_to_string(dir.path().join("web/page.html")).unwrap();
    assert_eq!(
        page,
        "  <script src=\"../closure-library/closure/goog/base.js\"></script><!--@base_js@-->\n"
    );
}

#[test]
fn commands_run_from_a_nested_directory_find_the_project() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path()).arg("init").assert().success();
    let nested = dir.path().join("development/js_dev");

    modkit(&nested, home.path())
        .arg("apply-config")
        .assert()
        .success();
}

#[test]
fn outside_a_project_the_error_names_the_problem() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path())
        .arg("apply-config")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not inside a modkit project"));
}

#[test]
fn missing_default_configuration_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let empty_home = TempDir::new().unwrap();

    modkit(dir.path(), empty_home.path())
        .arg("init")
        .assert()
        .success();
    modkit(dir.path(), empty_home.path())
        .arg("apply-config")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn quiet_mode_suppresses_success_output() {
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completions_emit_a_script() {
    Command::cargo_bin("modkit")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modkit"));
}

#[test]
fn update_deps_fails_cleanly_when_the_library_is_absent() {
    // The dependency writer lives inside the (undownloaded) library; its
    // invocation must fail and the test runner must stay untouched.
    let dir = TempDir::new().unwrap();
    let home = install_root();

    modkit(dir.path(), home.path()).arg("init").assert().success();
    let runner_before =
        fs::read_to_string(dir.path().join("development/all_tests.html")).unwrap();

    modkit(dir.path(), home.path())
        .arg("update-deps")
        .assert()
        .failure();

    let runner_after =
        fs::read_to_string(dir.path().join("development/all_tests.html")).unwrap();
    assert_eq!(runner_before, runner_after);
}

#[test]
fn user_layer_sits_between_project_and_default() {
    // The user config overrides the default development dir; the project
    // config stays sparse. Exercised through a fake HOME.
    let dir = TempDir::new().unwrap();
    let home = install_root();
    let user_home = TempDir::new().unwrap();
    fs::write(
        user_home.path().join(".modkit.toml"),
        "[project]\ndevelopment = \"site\"\n",
    )
    .unwrap();

    fs::write(dir.path().join("modkit.toml"), "[project]\n").unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(dir.path().join("site/page.html"), "<!--@deps_js@-->\n").unwrap();

    let mut cmd = modkit(dir.path(), home.path());
    cmd.env("HOME", user_home.path());
    cmd.arg("apply-config").assert().success();

    let page = fs::read_to_string(dir.path().join("site/page.html")).unwrap();
    assert!(page.contains("js_dev/deps.js"));
}
