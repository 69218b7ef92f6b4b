use super::{Command, CommandInfo, Context, REGISTRY};
use crate::error::Result;

pub(super) const HELP_INFO: CommandInfo = CommandInfo {
    name: "help",
    aliases: &[],
    description: "Display help information for Switch CLI commands",
};

pub(super) const DEFAULT_INFO: CommandInfo = CommandInfo {
    name: "default",
    aliases: &[],
    description: "Default action when no command is provided.",
};

/// Text listing every registered command.
pub fn usage() -> String {
    let mut text = String::from("Usage: switch [command] [options]\n\nAvailable commands:\n");
    for info in REGISTRY {
        let name = if info.aliases.is_empty() {
            info.name.to_string()
        } else {
            format!("{} ({})", info.name, info.aliases.join(", "))
        };
        text.push_str(&format!("  {name:<20} {}\n", info.description));
    }
    text.push_str("\nFor more information on a specific command, use: switch <command> --help");
    text
}

/// `switch help`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn info(&self) -> &'static CommandInfo {
        &HELP_INFO
    }

    fn execute(&self, _ctx: &Context<'_>) -> Result<()> {
        println!("\nSwitch CLI Help\n");
        println!("{}", usage());
        Ok(())
    }
}

/// Runs when `switch` is invoked without a command.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCommand;

impl Command for DefaultCommand {
    fn info(&self) -> &'static CommandInfo {
        &DEFAULT_INFO
    }

    fn execute(&self, _ctx: &Context<'_>) -> Result<()> {
        println!("\nWelcome to the Switch CLI app!\n");
        println!("Run switch --help for usage.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_all_commands() {
        let text = usage();
        for info in REGISTRY {
            assert!(text.contains(info.name), "'{}' missing from usage", info.name);
        }
        assert!(text.contains("check (setup)"));
    }
}
