//! Command-line interface implementation for Switch.
//! Parses arguments with clap into typed options and maps the chosen
//! subcommand onto its [`Command`] implementation.

use crate::commands::{
    AddSecretCommand, AddSecretOptions, CheckCommand, Command, DefaultCommand, GitStatusCommand,
    HelpCommand, InitCommand,
};
use crate::config::{AppType, DomainType, LanguageType, ResourceType};
use crate::onboard::InitOptions;
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};

/// Command-line arguments structure for Switch.
#[derive(Parser, Debug)]
#[command(
    name = "switch",
    author,
    version,
    about = "Switch: onboards projects onto the Switch CI/CD platform",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Enable debug logging output
    #[arg(short = 'X', long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Enables your current project(folder) for the Switch Platform
    #[command(visible_alias = "i")]
    Init(InitArgs),

    /// Performs a system check to locate required dependencies
    #[command(visible_alias = "setup")]
    Check,

    /// Add a secret to Azure Key Vault
    AddSecret(AddSecretArgs),

    /// Show the git status of the current directory
    GitStatus,

    /// Display help information for Switch CLI commands
    Help,

    /// Default action when no command is provided
    Default,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InitArgs {
    /// Domain owning the project
    #[arg(long, value_enum)]
    pub domain: Option<DomainType>,

    /// Application type (also selects the template branch)
    #[arg(long = "type", value_enum)]
    pub app_type: Option<AppType>,

    /// Language / framework of the project
    #[arg(long, value_enum)]
    pub language: Option<LanguageType>,

    /// GitHub organization, derived from the domain when omitted
    #[arg(long)]
    pub github_org: Option<String>,

    /// Core template: OWNER/REPO, git URL or local directory
    #[arg(long)]
    pub base: Option<String>,

    /// Branch of the core template
    #[arg(long)]
    pub branch: Option<String>,

    /// Additional resource; may be repeated
    #[arg(long = "resource", value_enum)]
    pub resources: Vec<ResourceType>,

    /// Port the service listens on (Container Apps)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Do not file the onboarding ticket
    #[arg(long)]
    pub skip_tickets: bool,
}

impl From<InitArgs> for InitOptions {
    fn from(args: InitArgs) -> Self {
        Self {
            domain: args.domain,
            app_type: args.app_type,
            language: args.language,
            github_org: args.github_org,
            base: args.base,
            branch: args.branch,
            resources: args.resources,
            port: args.port,
            skip_tickets: args.skip_tickets,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddSecretArgs {
    /// The name of the Azure Key Vault
    #[arg(long)]
    pub vault_name: String,

    /// The name of the secret
    #[arg(long)]
    pub name: String,

    /// The value of the secret
    #[arg(long)]
    pub value: String,
}

impl From<AddSecretArgs> for AddSecretOptions {
    fn from(args: AddSecretArgs) -> Self {
        Self { vault_name: args.vault_name, name: args.name, value: args.value }
    }
}

impl Commands {
    /// Builds the command to run; no subcommand means [`DefaultCommand`].
    pub fn into_command(command: Option<Self>) -> Box<dyn Command> {
        match command {
            Some(Commands::Init(args)) => Box::new(InitCommand::new(args.into())),
            Some(Commands::Check) => Box::new(CheckCommand),
            Some(Commands::AddSecret(args)) => Box::new(AddSecretCommand::new(args.into())),
            Some(Commands::GitStatus) => Box::new(GitStatusCommand),
            Some(Commands::Help) => Box::new(HelpCommand),
            Some(Commands::Default) | None => Box::new(DefaultCommand),
        }
    }
}

/// Parses command line arguments and returns the Cli structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("{e}");
                let _ = Cli::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
