use std::ffi::OsString;

use clap::Parser;
use switch_cli::cli::{AddSecretArgs, Cli, Commands, InitArgs};
use switch_cli::config::{AppType, DomainType, LanguageType, ResourceType};
use switch_cli::onboard::InitOptions;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("switch")];
    res.extend(args.iter().map(OsString::from));
    res
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(make_args(args)).unwrap()
}

#[test]
fn test_no_command() {
    let parsed = parse(&[]);
    assert!(parsed.command.is_none());
    assert!(!parsed.debug);
    assert_eq!(Commands::into_command(parsed.command).info().name, "default");
}

#[test]
fn test_debug_flag() {
    assert!(parse(&["-X", "check"]).debug);
    assert!(parse(&["check", "--debug"]).debug);
}

#[test]
fn test_init_defaults() {
    let parsed = parse(&["init"]);
    assert_eq!(parsed.command, Some(Commands::Init(InitArgs::default())));
}

#[test]
fn test_init_all_flags() {
    let parsed = parse(&[
        "i",
        "--domain",
        "TX",
        "--type",
        "ca",
        "--language",
        "c#",
        "--github-org",
        "my-org",
        "--base",
        "./templates/core",
        "--branch",
        "main",
        "--resource",
        "postgres",
        "--resource",
        "eventhub",
        "--port",
        "8080",
        "--skip-tickets",
    ]);

    let Some(Commands::Init(args)) = parsed.command else {
        panic!("expected init");
    };
    let options = InitOptions::from(args);
    assert_eq!(options.domain, Some(DomainType::TalentExperience));
    assert_eq!(options.app_type, Some(AppType::ContainerApp));
    assert_eq!(options.language, Some(LanguageType::CSharp));
    assert_eq!(options.github_org.as_deref(), Some("my-org"));
    assert_eq!(options.base.as_deref(), Some("./templates/core"));
    assert_eq!(options.branch.as_deref(), Some("main"));
    assert_eq!(options.resources, vec![ResourceType::Postgres, ResourceType::EventHub]);
    assert_eq!(options.port, Some(8080));
    assert!(options.skip_tickets);
}

#[test]
fn test_init_rejects_invalid_values() {
    assert!(Cli::try_parse_from(make_args(&["init", "--type", "vm"])).is_err());
    assert!(Cli::try_parse_from(make_args(&["init", "--port", "0"])).is_err());
    assert!(Cli::try_parse_from(make_args(&["init", "--port", "70000"])).is_err());
    assert!(Cli::try_parse_from(make_args(&["init", "--resource", "redis"])).is_err());
}

#[test]
fn test_check_alias() {
    assert_eq!(parse(&["setup"]).command, Some(Commands::Check));
    assert_eq!(parse(&["check"]).command, Some(Commands::Check));
}

#[test]
fn test_add_secret() {
    let parsed = parse(&["add-secret", "--vault-name", "kv", "--name", "db", "--value", "s3cr3t"]);
    assert_eq!(
        parsed.command,
        Some(Commands::AddSecret(AddSecretArgs {
            vault_name: "kv".into(),
            name: "db".into(),
            value: "s3cr3t".into(),
        }))
    );
}

#[test]
fn test_add_secret_requires_all_arguments() {
    assert!(Cli::try_parse_from(make_args(&["add-secret", "--vault-name", "kv"])).is_err());
}

#[test]
fn test_remaining_commands() {
    assert_eq!(parse(&["git-status"]).command, Some(Commands::GitStatus));
    assert_eq!(parse(&["help"]).command, Some(Commands::Help));
    assert_eq!(parse(&["default"]).command, Some(Commands::Default));
    assert!(Cli::try_parse_from(make_args(&["deploy"])).is_err());
}

#[test]
fn test_commands_map_to_registry_entries() {
    for (args, name) in [
        (&["init"][..], "init"),
        (&["setup"][..], "check"),
        (&["git-status"][..], "git-status"),
        (&["help"][..], "help"),
        (&["add-secret", "--vault-name", "kv", "--name", "n", "--value", "v"][..], "add-secret"),
    ] {
        let command = Commands::into_command(parse(args).command);
        assert_eq!(command.info().name, name);
    }
}
