//! Switch is a scaffolding tool that onboards projects onto the Switch CI/CD
//! platform. It renders the platform's CI/CD templates into a project,
//! persists the project descriptor (`Switchfile`) and files onboarding tickets.

/// Command-line interface module for the Switch application
pub mod cli;

/// Subcommands and their static registry
pub mod commands;

/// Project configuration (the `Switchfile`)
pub mod config;

/// Well-known file names and repositories
pub mod constants;

/// Error types and handling for the Switch application
pub mod error;

/// File tree helpers: listing, copying and backup-before-overwrite
pub mod fs;

/// Issues and organizations through the `gh` CLI
pub mod github;

/// Literal exclusion patterns and built-in ignores
pub mod ignore;

/// Template source resolution (GitHub, git or local directory)
pub mod loader;

/// Logger setup
pub mod logger;

/// The `switch init` workflow
pub mod onboard;

/// Path placeholders and relative paths
pub mod path;

/// External process invocation
pub mod process;

/// User input and interaction handling
pub mod prompt;

/// File content rendering
pub mod renderer;

/// Runtime settings
pub mod settings;

/// Template application with per-file failure tracking
pub mod template;
