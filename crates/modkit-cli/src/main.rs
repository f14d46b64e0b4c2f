//! # modkit CLI
//!
//! Scaffolding and build tool for modular JavaScript front-end projects.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Resolve the installation root (`MODKIT_HOME`, read exactly once here).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod workspace;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init — so that
    // MODKIT_HOME may come from a local .env file during development.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap's own rendering: help/version go to stdout with exit 0,
            // real argument errors to stderr with exit 2.
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Resolve the installation root ──────────────────────────────────
    // The only place the process environment is consulted; everything below
    // receives the root as a value.
    let env_home = std::env::var("MODKIT_HOME").ok();
    let verbose = cli.global.verbose > 0;

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);

    // ── 5. Dispatch + 6. Error handling ───────────────────────────────────
    match run(cli, env_home.as_deref(), output) {
        Ok(()) => {
            info!("modkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, env_home: Option<&str>, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Download => {
            commands::download::execute(&workspace::install_root(env_home)?, &output)
        }
        Commands::ApplyConfig => {
            commands::apply_config::execute(&workspace::install_root(env_home)?, &output)
        }
        Commands::UpdateDeps => {
            commands::update_deps::execute(&workspace::install_root(env_home)?, &output)
        }
        Commands::Build => commands::build::execute(&workspace::install_root(env_home)?, &output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message to stderr so it survives stdout
    //    redirection. Colour is disabled when stderr is not a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
