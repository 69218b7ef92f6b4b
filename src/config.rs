//! Project configuration (the `Switchfile`).
//! Defines the persisted data model and loads/saves it as YAML.

use crate::error::{Error, Result};
use clap::ValueEnum;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Business domain owning the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DomainType {
    #[serde(rename = "TX")]
    #[value(name = "TX")]
    TalentExperience,
    #[serde(rename = "AX")]
    #[value(name = "AX")]
    ApplicantExperience,
    #[serde(rename = "FX")]
    #[value(name = "FX")]
    FulfillmentExperience,
    #[serde(rename = "OX")]
    #[value(name = "OX")]
    OnboardingExperience,
    #[serde(rename = "SharedServices")]
    #[value(name = "SharedServices")]
    SharedServices,
    #[serde(rename = "AI")]
    #[value(name = "AI")]
    AiPlatform,
    #[serde(rename = "Platform")]
    #[value(name = "Platform")]
    SwitchPlatform,
    #[serde(rename = "Other")]
    #[value(name = "Other")]
    Other,
}

impl DomainType {
    pub const ALL: [DomainType; 8] = [
        DomainType::TalentExperience,
        DomainType::ApplicantExperience,
        DomainType::FulfillmentExperience,
        DomainType::OnboardingExperience,
        DomainType::SharedServices,
        DomainType::AiPlatform,
        DomainType::SwitchPlatform,
        DomainType::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DomainType::TalentExperience => "TX",
            DomainType::ApplicantExperience => "AX",
            DomainType::FulfillmentExperience => "FX",
            DomainType::OnboardingExperience => "OX",
            DomainType::SharedServices => "SharedServices",
            DomainType::AiPlatform => "AI",
            DomainType::SwitchPlatform => "Platform",
            DomainType::Other => "Other",
        }
    }

    /// GitHub organization derived from the domain; `None` for [`DomainType::Other`].
    pub fn organization(&self) -> Option<String> {
        match self {
            DomainType::Other => None,
            domain => Some(format!("FA-Switch-{}", domain.code())),
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Deployment target of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum AppType {
    #[serde(rename = "fa")]
    #[value(name = "fa")]
    FunctionApp,
    #[serde(rename = "swa")]
    #[value(name = "swa")]
    StaticWebApp,
    #[serde(rename = "aca")]
    #[value(name = "aca", alias = "ca")]
    ContainerApp,
}

impl AppType {
    pub const ALL: [AppType; 3] =
        [AppType::FunctionApp, AppType::StaticWebApp, AppType::ContainerApp];

    /// Short code, also the default template branch.
    pub fn code(&self) -> &'static str {
        match self {
            AppType::FunctionApp => "fa",
            AppType::StaticWebApp => "swa",
            AppType::ContainerApp => "aca",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppType::FunctionApp => "Function App",
            AppType::StaticWebApp => "Static Web App",
            AppType::ContainerApp => "Container App",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Implementation language of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LanguageType {
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "node")]
    Node,
    #[serde(rename = "c#", alias = "csharp")]
    #[value(name = "csharp", alias = "c#")]
    CSharp,
    #[serde(rename = "python")]
    Python,
}

impl LanguageType {
    pub const ALL: [LanguageType; 4] =
        [LanguageType::Java, LanguageType::Node, LanguageType::CSharp, LanguageType::Python];

    pub fn code(&self) -> &'static str {
        match self {
            LanguageType::Java => "java",
            LanguageType::Node => "node",
            LanguageType::CSharp => "c#",
            LanguageType::Python => "python",
        }
    }

    /// Java and C# projects ship their own static-analysis setup.
    pub fn uses_analysis_template(&self) -> bool {
        !matches!(self, LanguageType::Java | LanguageType::CSharp)
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Deployment environment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentType {
    #[serde(rename = "dev")]
    Development,
    #[serde(rename = "ci")]
    CI,
    #[serde(rename = "qa")]
    QA,
    #[serde(rename = "uat")]
    UAT,
    #[serde(rename = "ct")]
    CustomerTest,
    #[serde(rename = "prod")]
    Production,
}

impl EnvironmentType {
    pub fn code(&self) -> &'static str {
        match self {
            EnvironmentType::Development => "dev",
            EnvironmentType::CI => "ci",
            EnvironmentType::QA => "qa",
            EnvironmentType::UAT => "uat",
            EnvironmentType::CustomerTest => "ct",
            EnvironmentType::Production => "prod",
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionType {
    #[serde(rename = "eastus2")]
    NorthAmerica,
    #[serde(rename = "francecentral")]
    Europe,
    #[serde(rename = "both")]
    Both,
}

/// External resource bound to the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lower")]
pub enum ResourceType {
    Postgres,
    EventHub,
    Storage,
    CosmosDb,
    EventGrid,
}

/// Kind of project hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    Build,
    UnitTests,
    IntegrationTests,
    DbMigration,
    Env,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

pub type Hooks = IndexMap<HookKind, HookConfig>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(rename = "type")]
    pub env_type: EnvironmentType,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl EnvironmentConfig {
    pub fn new<S: Into<String>>(env_type: EnvironmentType, name: S) -> Self {
        Self { env_type, name: name.into(), region: None, enabled: None }
    }
}

/// The persisted project descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainType>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<AppType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageType>,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub hooks: Hooks,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvironmentConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl ProjectConfig {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            domain: None,
            app_type: None,
            language: None,
            repository: String::new(),
            hooks: Hooks::new(),
            environments: Vec::new(),
            resources: Vec::new(),
            port: None,
        }
    }

    /// Sets `repository` to `{organization}/{name}`.
    pub fn assign_repository(&mut self, organization: &str) {
        self.repository = format!("{}/{}", organization, self.name);
    }

    pub fn has_environment(&self, env_type: EnvironmentType) -> bool {
        self.environments.iter().any(|env| env.env_type == env_type)
    }

    /// Adds an environment unless one of the same type is already registered.
    ///
    /// # Returns
    /// * `bool` - true if the environment was added
    pub fn register_environment<S: Into<String>>(
        &mut self,
        name: S,
        env_type: EnvironmentType,
    ) -> bool {
        if self.has_environment(env_type) {
            return false;
        }
        self.environments.push(EnvironmentConfig::new(env_type, name));
        true
    }

    /// Ensures the `dev` and `ci` environments exist.
    ///
    /// # Returns
    /// * `Vec<EnvironmentType>` - the environment types that had to be added
    pub fn auto_register_environments(&mut self) -> Vec<EnvironmentType> {
        [("dev", EnvironmentType::Development), ("ci", EnvironmentType::CI)]
            .into_iter()
            .filter(|(name, env_type)| self.register_environment(*name, *env_type))
            .map(|(_, env_type)| env_type)
            .collect()
    }

    /// Rendering context for template contents.
    pub fn template_data(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rendering context for one environment: the config plus `currentEnv`.
    pub fn environment_data(&self, environment: &EnvironmentConfig) -> Result<serde_json::Value> {
        let mut data = self.template_data()?;
        if let Some(object) = data.as_object_mut() {
            object.insert("currentEnv".to_string(), serde_json::to_value(environment)?);
        }
        Ok(data)
    }
}

/// Loads the project configuration from `path`.
///
/// # Returns
/// * `Result<Option<ProjectConfig>>` - `None` if the file does not exist
///
/// # Errors
/// * `Error::ConfigParseError` if the document is malformed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Option<ProjectConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No configuration found at {}", path.display());
        return Ok(None);
    }

    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&content)
        .map_err(|source| Error::ConfigParseError { path: path.to_path_buf(), source })?;
    Ok(Some(config))
}

/// Writes the project configuration to `path`, replacing any existing file.
pub fn save_config<P: AsRef<Path>>(path: P, config: &ProjectConfig) -> Result<()> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(config).map_err(Error::ConfigSerializeError)?;
    debug!("Writing configuration to {}", path.display());
    fs::write(path, content)?;
    Ok(())
}
