use super::{Command, CommandInfo, Context};
use crate::error::{Error, Result};
use crate::process::{invoke, ProcessRunner};
use log::debug;

pub(super) const INFO: CommandInfo = CommandInfo {
    name: "check",
    aliases: &["setup"],
    description: "Performs a system check to locate required dependencies",
};

/// An external CLI the platform relies on, with the command proving it works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

pub const DEPENDENCIES: [Dependency; 3] = [
    Dependency { program: "git", args: &["--version"] },
    Dependency { program: "gh", args: &["auth", "status"] },
    Dependency { program: "az", args: &["account", "show"] },
];

/// Runs every dependency check, returning the programs that failed.
pub fn missing_dependencies(runner: &dyn ProcessRunner) -> Vec<&'static str> {
    DEPENDENCIES
        .iter()
        .filter(|dependency| match invoke(runner, dependency.program, dependency.args) {
            Ok(_) => {
                println!("  found    {}", dependency.program);
                false
            }
            Err(diagnostic) => {
                debug!("{} check failed: {}", dependency.program, diagnostic);
                println!(
                    "  missing  {}: '{}' is not installed or you're not logged in.",
                    dependency.program, dependency.program
                );
                true
            }
        })
        .map(|dependency| dependency.program)
        .collect()
}

/// `switch check` (alias `setup`).
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckCommand;

impl Command for CheckCommand {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    fn execute(&self, ctx: &Context<'_>) -> Result<()> {
        println!("\nChecking System Configuration\n");
        let missing = missing_dependencies(ctx.runner);
        if missing.is_empty() {
            println!("\nExcellent! All required CLIs are installed and configured.");
            return Ok(());
        }

        println!(
            "\nCritical dependencies are missing. Please install them, make sure you can login and try again.\n"
        );
        Err(Error::ValidationError(format!("missing dependencies: {}", missing.join(", "))))
    }
}
