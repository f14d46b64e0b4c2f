//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modkit",
    bin_name = "modkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold and build modular JavaScript front-end projects",
    long_about = "modkit initializes front-end projects built on a modular \
                  JavaScript library, keeps their generated references in \
                  sync with the project configuration, and drives the \
                  external dependency writer and compiler.",
    after_help = "EXAMPLES:\n\
        \x20 modkit init my-app\n\
        \x20 modkit download\n\
        \x20 modkit apply-config\n\
        \x20 modkit update-deps\n\
        \x20 modkit build",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a new project from the built-in template.
    #[command(
        about = "Create a new project skeleton",
        after_help = "EXAMPLES:\n\
            \x20 modkit init            # into the current directory\n\
            \x20 modkit init my-app     # into ./my-app"
    )]
    Init(InitArgs),

    /// Download the library and compiler declared in the configuration.
    #[command(
        about = "Fetch the vendored library and compiler",
        after_help = "Runs 'git clone' for the library and fetches/unpacks \
                      the compiler archive. Re-running replaces nothing that \
                      already exists."
    )]
    Download,

    /// Rewrite marker references across the development tree.
    #[command(
        name = "apply-config",
        about = "Propagate configuration into generated references",
        after_help = "Rewrites every marked line under the development \
                      directory. Safe to re-run: a second pass is a no-op."
    )]
    ApplyConfig,

    /// Regenerate the dependency manifest and the test-runner file list.
    #[command(
        name = "update-deps",
        about = "Refresh the module-dependency manifest and test list"
    )]
    UpdateDeps,

    /// Assemble and compile the production tree.
    #[command(about = "Build the production output")]
    Build,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modkit completions bash > ~/.local/share/bash-completion/completions/modkit\n\
            \x20 modkit completions zsh  > ~/.zfunc/_modkit\n\
            \x20 modkit completions fish > ~/.config/fish/completions/modkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory; created if missing. Defaults to the current
    /// directory.
    #[arg(value_name = "DIR", default_value = ".", help = "Directory to initialise")]
    pub dir: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
