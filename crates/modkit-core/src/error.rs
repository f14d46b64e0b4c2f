//! Unified error handling for the modkit core.
//!
//! Every failure the core can produce is a [`ModkitError`] variant carrying
//! the offending path/key. The core never prints — the CLI layer owns
//! user-visible formatting and exit codes, driven by [`ModkitError::category`]
//! and [`ModkitError::suggestions`].

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for modkit core operations.
///
/// All errors are:
/// - Cloneable (causes are carried as strings, not live `io::Error`s)
/// - Categorizable (for CLI display and exit-code selection)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModkitError {
    /// A required configuration document is missing or unreadable.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A configuration document exists but is not valid sectioned key/value
    /// text.
    #[error("Failed to parse configuration file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// A (section, key) pair is absent from every configuration source.
    #[error("Missing configuration key '{key}' in section '{section}'")]
    MissingConfigKey { section: String, key: String },

    /// A configuration key resolved but its value is unusable.
    #[error("Invalid value for configuration key '{key}' in section '{section}': {reason}")]
    InvalidConfigValue {
        section: String,
        key: String,
        reason: String,
    },

    /// A target file could not be read or written.
    #[error("Cannot access {path}: {reason}")]
    FileAccess { path: PathBuf, reason: String },

    /// A marker updater could not compute a replacement value.
    #[error("Substitution for marker '{marker}' failed in {path}")]
    SubstitutionFailed {
        path: PathBuf,
        marker: String,
        #[source]
        source: Box<ModkitError>,
    },

    /// The external dependency writer exited non-zero.
    #[error("Updating dependencies failed: {detail}")]
    DependencyGenerationFailed { detail: String },

    /// An external tool could not be spawned at all.
    #[error("Failed to launch '{program}': {reason}")]
    ToolLaunchFailed { program: String, reason: String },

    /// Project initialization would overwrite existing files.
    #[error("Conflicted files: {}", .files.join(", "))]
    ConflictedFiles { files: Vec<String> },
}

impl ModkitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => vec![
                format!("Expected a configuration file at {}", path.display()),
                "Run 'modkit init' inside a project directory to create one".into(),
                "Check MODKIT_HOME if the default configuration is missing".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the syntax in {}", path.display()),
                "Sections are tables like [project]; values are plain scalars".into(),
            ],
            Self::MissingConfigKey { section, key } => vec![
                format!("Add '{key}' under the [{section}] section of modkit.toml"),
                "Keys omitted from the project file fall back to the user and default files".into(),
            ],
            Self::InvalidConfigValue { section, key, .. } => {
                vec![format!("Correct '{key}' in the [{section}] section")]
            }
            Self::FileAccess { path, .. } => vec![
                format!("Check permissions on {}", path.display()),
                "Ensure no other process holds the file open".into(),
            ],
            Self::SubstitutionFailed { source, .. } => source.suggestions(),
            Self::DependencyGenerationFailed { .. } => vec![
                "Run 'modkit download' if the library is not installed yet".into(),
                "The dependency writer's error output is shown above".into(),
            ],
            Self::ToolLaunchFailed { program, .. } => vec![
                format!("Ensure '{program}' is installed and on your PATH"),
            ],
            Self::ConflictedFiles { files } => vec![
                format!("Remove or move aside: {}", files.join(", ")),
                "modkit never overwrites existing files during init".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::MissingConfigKey { .. }
            | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::SubstitutionFailed { source, .. } => source.category(),
            Self::FileAccess { .. }
            | Self::DependencyGenerationFailed { .. }
            | Self::ToolLaunchFailed { .. } => ErrorCategory::Internal,
            Self::ConflictedFiles { .. } => ErrorCategory::UserError,
        }
    }
}

/// Error categories for UI display and exit-code mapping.
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

/// Convenient result type alias.
pub type ModkitResult<T> = Result<T, ModkitError>;
