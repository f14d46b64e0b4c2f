//! modkit core — configuration resolution and source-tree rewriting.
//!
//! This crate holds the domain and application layers of modkit, a
//! scaffolding/build tool for front-end projects built on a modular
//! JavaScript library:
//!
//! - [`config`] — the layered configuration resolver. Up to three sectioned
//!   key/value documents (project > user > default) merge per key into a
//!   [`config::ResolvedConfig`] with typed accessors that fail fast on
//!   missing keys.
//! - [`paths`] — pure relative-path and URL-path planning for values that
//!   get embedded into generated markup.
//! - [`markers`] — the fixed, ordered registry of substitution markers and
//!   the single-line rewrite rule (body replaced, token preserved).
//! - [`substitute`] — the marker-substitution engine: walks a tree, rewrites
//!   eligible files in place, prunes vendored library/compiler directories.
//! - [`deps`] — the dependency scanner: regenerates the module-dependency
//!   manifest through the external dependency writer and rebuilds the
//!   test-runner's bounded file list.
//!
//! Infrastructure is injected through the [`ports`] traits; the
//! `modkit-adapters` crate provides the production implementations and the
//! CLI crate wires everything together. The core never prints and never
//! reads the process environment — everything arrives as values.

pub mod config;
pub mod deps;
pub mod error;
pub mod markers;
pub mod paths;
pub mod ports;
pub mod substitute;

#[cfg(test)]
pub(crate) mod testfs;

/// Public API — what external crates should use.
pub mod prelude {
    pub use crate::config::{ConfigSource, ResolvedConfig, SourceKind};
    pub use crate::deps::DependencyScanner;
    pub use crate::error::{ErrorCategory, ModkitError, ModkitResult};
    pub use crate::ports::{Filesystem, ToolOutput, ToolRunner};
    pub use crate::substitute::{ApplyStats, SubstitutionEngine};
}

/// Version info.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
