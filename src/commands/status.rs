use super::{Command, CommandInfo, Context};
use crate::error::{Error, Result};
use crate::process::invoke;

pub(super) const INFO: CommandInfo = CommandInfo {
    name: "git-status",
    aliases: &[],
    description: "Show the git status of the current directory",
};

/// `switch git-status`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStatusCommand;

impl Command for GitStatusCommand {
    fn info(&self) -> &'static CommandInfo {
        &INFO
    }

    fn execute(&self, ctx: &Context<'_>) -> Result<()> {
        println!("\nGit Status\n");
        let stdout = invoke(ctx.runner, "git", &["status"])
            .map_err(|message| Error::process("git", format!("Git command failed: {message}")))?;
        println!("{stdout}");
        Ok(())
    }
}
