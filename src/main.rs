//! Switch's main application entry point.
//! Parses the command line, resolves settings once and dispatches to the
//! selected command.

use std::process::ExitCode;

use log::debug;
use switch_cli::{
    cli::{get_args, Cli, Commands},
    commands::Context,
    error::{default_error_handler, Result},
    logger::init_logger,
    process::SystemProcessRunner,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
    settings::Settings,
};

/// Main application entry point.
fn main() -> ExitCode {
    let args = get_args();
    init_logger(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => default_error_handler(err),
    }
}

/// Runs the selected command against the current directory.
fn run(args: Cli) -> Result<()> {
    let settings = Settings::from_env();
    let project_dir = std::env::current_dir()?;

    let prompter = DialoguerPrompter::new();
    let runner = SystemProcessRunner::in_dir(&project_dir);
    let renderer = MiniJinjaRenderer::new()?;

    let command = Commands::into_command(args.command);
    debug!("Running '{}' in '{}'", command.info().name, project_dir.display());

    let ctx = Context {
        project_dir,
        settings: &settings,
        prompter: &prompter,
        runner: &runner,
        renderer: &renderer,
    };
    command.execute(&ctx)
}
