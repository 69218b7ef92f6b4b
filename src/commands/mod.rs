//! Subcommands of the `switch` binary.
//! Every command is registered explicitly in [`REGISTRY`]; the CLI layer
//! builds the matching [`Command`] with its typed options and runs it against a
//! [`Context`].

mod check;
mod help;
mod init;
mod secret;
mod status;

pub use check::{CheckCommand, Dependency, DEPENDENCIES};
pub use help::{DefaultCommand, HelpCommand};
pub use init::InitCommand;
pub use secret::{AddSecretCommand, AddSecretOptions};
pub use status::GitStatusCommand;

use crate::error::Result;
use crate::process::ProcessRunner;
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;
use crate::settings::Settings;
use std::path::PathBuf;

/// Name, aliases and one-line description of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Every available command, in the order `switch help` lists them.
pub const REGISTRY: &[CommandInfo] = &[
    init::INFO,
    check::INFO,
    secret::INFO,
    status::INFO,
    help::HELP_INFO,
    help::DEFAULT_INFO,
];

/// Capabilities handed to a running command.
pub struct Context<'a> {
    /// Directory the command operates on (the current directory for the binary)
    pub project_dir: PathBuf,
    pub settings: &'a Settings,
    pub prompter: &'a dyn Prompter,
    pub runner: &'a dyn ProcessRunner,
    pub renderer: &'a dyn TemplateRenderer,
}

/// A runnable subcommand.
pub trait Command {
    /// Registry entry describing this command.
    fn info(&self) -> &'static CommandInfo;

    /// Runs the command.
    ///
    /// # Errors
    /// Any workflow-level failure; the caller turns it into an exit code.
    fn execute(&self, ctx: &Context<'_>) -> Result<()>;
}
