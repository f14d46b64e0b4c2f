//! Structured error handling for the modkit CLI.
//!
//! Wraps core errors, attaches user-actionable suggestions, and maps every
//! failure onto a stable exit code. The core crates never print — this
//! module is where errors become text.

use std::path::PathBuf;
use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use modkit_core::error::{ErrorCategory as CoreCategory, ModkitError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// All failures the CLI can surface.
#[derive(Debug, Error)]
pub enum CliError {
    /// No project configuration found in this directory or any ancestor.
    #[error("Not inside a modkit project (no modkit.toml found above {start})")]
    ProjectRootNotFound { start: PathBuf },

    /// An error propagated from the core crates.
    #[error("{0}")]
    Core(#[from] ModkitError),

    /// A configuration-environment problem outside the core's taxonomy.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command ran and failed.
    #[error("External command failed: {command}")]
    ExternalCommandFailed { command: String, detail: String },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectRootNotFound { .. } => vec![
                "Run this command inside a modkit project".into(),
                "Create one with: modkit init".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::ConfigError { message } => vec![
                format!("Configuration issue: {message}"),
                "Check MODKIT_HOME and ~/.modkit.toml".into(),
            ],
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
            Self::ExternalCommandFailed { command, detail } => {
                let mut out = vec![format!("'{command}' exited with an error")];
                if !detail.trim().is_empty() {
                    out.push(format!("Tool output: {}", detail.trim()));
                }
                out.push("Ensure the tool is installed and on your PATH".into());
                out
            }
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectRootNotFound { .. } => ErrorCategory::NotFound,
            Self::Core(core) => match core.category() {
                CoreCategory::UserError => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::ExternalCommandFailed { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            "\n{} {}\n\n  {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(output, "\n  {} {}\n", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = write!(
                output,
                "\n{} {}\n",
                "ℹ".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nError: {self}\n");

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error.
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err = CliError::Core(ModkitError::ConflictedFiles {
            files: vec!["development".into()],
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::ProjectRootNotFound {
            start: PathBuf::from("/tmp"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::Core(ModkitError::MissingConfigKey {
            section: "library".into(),
            key: "root".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn project_root_not_found_suggests_init() {
        let err = CliError::ProjectRootNotFound {
            start: PathBuf::from("/tmp"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("modkit init")));
    }

    #[test]
    fn external_command_failure_carries_tool_output() {
        let err = CliError::ExternalCommandFailed {
            command: "git clone".into(),
            detail: "fatal: repository not found".into(),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("repository not found"))
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let err = CliError::ProjectRootNotFound {
            start: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::ConfigError {
            message: "x".into(),
        };
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
