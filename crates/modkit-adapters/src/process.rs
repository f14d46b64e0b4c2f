//! Subprocess adapter for the ToolRunner port.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use modkit_core::error::{ModkitError, ModkitResult};
use modkit_core::ports::{ToolOutput, ToolRunner};

/// Production tool runner using `std::process::Command`.
///
/// Arguments are always passed as an argv array; no shell is involved, so
/// an element may contain whitespace (the dependency writer's pre-joined
/// `--root_with_prefix=<root> <prefix>` relies on this). Both output
/// streams are captured and fully drained before the call returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> ModkitResult<ToolOutput> {
        debug!(program, ?args, cwd = %cwd.display(), "running external tool");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ModkitError::ToolLaunchFailed {
                program: program.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(ToolOutput {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_program_is_a_launch_failure() {
        let runner = ProcessRunner::new();
        let err = runner
            .run(
                "modkit-no-such-binary-expected",
                &[],
                &PathBuf::from("."),
            )
            .unwrap_err();
        assert!(matches!(err, ModkitError::ToolLaunchFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn whitespace_survives_inside_a_single_argument() {
        // `sh -c 'printf %s "$0"' <arg>` echoes the argument back verbatim.
        let runner = ProcessRunner::new();
        let out = runner
            .run(
                "sh",
                &[
                    "-c".into(),
                    "printf %s \"$0\"".into(),
                    "--root_with_prefix=a b".into(),
                ],
                &PathBuf::from("."),
            )
            .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "--root_with_prefix=a b");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_and_stderr_are_captured() {
        let runner = ProcessRunner::new();
        let out = runner
            .run(
                "sh",
                &["-c".into(), "echo boom >&2; exit 2".into()],
                &PathBuf::from("."),
            )
            .unwrap();
        assert_eq!(out.status, 2);
        assert!(out.stderr.contains("boom"));
        assert!(!out.success());
    }
}
