use std::fs;

use switch_cli::config::{
    load_config, save_config, AppType, DomainType, EnvironmentConfig, EnvironmentType, HookConfig,
    HookKind, LanguageType, ProjectConfig, RegionType, ResourceType,
};
use switch_cli::error::Error;
use tempfile::TempDir;

fn sample_config(environments: usize) -> ProjectConfig {
    let env_types = [
        EnvironmentType::Development,
        EnvironmentType::CI,
        EnvironmentType::QA,
        EnvironmentType::UAT,
        EnvironmentType::Production,
    ];

    let mut config = ProjectConfig::new("payments-api");
    config.domain = Some(DomainType::FulfillmentExperience);
    config.app_type = Some(AppType::ContainerApp);
    config.language = Some(LanguageType::CSharp);
    config.port = Some(8080);
    config.resources = vec![ResourceType::CosmosDb, ResourceType::EventGrid];
    config.assign_repository("FA-Switch-FX");
    config.hooks.insert(
        HookKind::DbMigration,
        HookConfig { command: Some("./migrate.sh".into()), kind: Some("script".into()) },
    );
    config.hooks.insert(HookKind::IntegrationTests, HookConfig::default());
    for env_type in env_types.iter().take(environments) {
        config.environments.push(EnvironmentConfig {
            env_type: *env_type,
            name: env_type.code().to_string(),
            region: Some(RegionType::Both),
            enabled: Some(true),
        });
    }
    config
}

#[test]
fn test_config_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Switchfile");

    for environments in 0..=5 {
        let config = sample_config(environments);
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), Some(config), "{environments} environments");
    }
}

#[test]
fn test_missing_config_is_none() {
    let temp = TempDir::new().unwrap();
    assert_eq!(load_config(temp.path().join("Switchfile")).unwrap(), None);
}

#[test]
fn test_malformed_config_names_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Switchfile");
    fs::write(&path, "name: [unterminated\n").unwrap();

    match load_config(&path) {
        Err(err @ Error::ConfigParseError { .. }) => {
            assert!(err.to_string().contains("Switchfile"));
        }
        other => panic!("expected ConfigParseError, got {other:?}"),
    }
}

#[test]
fn test_serialized_field_names() {
    let yaml = serde_yaml::to_string(&sample_config(1)).unwrap();

    assert!(yaml.contains("type: aca"));
    assert!(yaml.contains("c#"));
    assert!(yaml.contains("domain: FX"));
    assert!(yaml.contains("db-migration:"));
    assert!(yaml.contains("- cosmosdb"));
    assert!(yaml.contains("region: both"));
}

#[test]
fn test_reads_hand_written_switchfile() {
    let yaml = r#"
name: web
type: swa
language: csharp
repository: FA-Switch-AX/web
hooks:
  build:
    command: npm run build
environments:
  - type: dev
    name: dev
    region: eastus2
"#;
    let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.app_type, Some(AppType::StaticWebApp));
    assert_eq!(config.language, Some(LanguageType::CSharp));
    assert_eq!(config.hooks[&HookKind::Build].command.as_deref(), Some("npm run build"));
    assert_eq!(config.environments[0].region, Some(RegionType::NorthAmerica));
    assert!(config.resources.is_empty());
    assert_eq!(config.port, None);
}

#[test]
fn test_environment_registration_is_idempotent() {
    let mut config = ProjectConfig::new("demo");

    assert_eq!(
        config.auto_register_environments(),
        vec![EnvironmentType::Development, EnvironmentType::CI]
    );
    assert!(config.auto_register_environments().is_empty());
    assert!(!config.register_environment("development", EnvironmentType::Development));
    assert_eq!(config.environments.len(), 2);
}

#[test]
fn test_auto_registration_keeps_existing_environments() {
    let mut config = ProjectConfig::new("demo");
    config.register_environment("integration", EnvironmentType::CI);

    assert_eq!(config.auto_register_environments(), vec![EnvironmentType::Development]);
    let names: Vec<&str> = config.environments.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["integration", "dev"]);
}

#[test]
fn test_organization_from_domain() {
    assert_eq!(DomainType::TalentExperience.organization().as_deref(), Some("FA-Switch-TX"));
    assert_eq!(DomainType::SharedServices.organization().as_deref(), Some("FA-Switch-SharedServices"));
    assert_eq!(DomainType::Other.organization(), None);
}

#[test]
fn test_environment_data_adds_current_env() {
    let config = sample_config(2);
    let data = config.environment_data(&config.environments[1]).unwrap();

    assert_eq!(data["name"], "payments-api");
    assert_eq!(data["currentEnv"]["name"], "ci");
    assert_eq!(data["currentEnv"]["type"], "ci");
}
