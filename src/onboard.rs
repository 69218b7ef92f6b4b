//! Project onboarding workflow behind `switch init`.
//!
//! The workflow loads any existing Switchfile, collects the missing project
//! metadata, renders the core CI/CD template plus the local per-environment and
//! static-analysis templates into a temporary workspace, then moves the managed
//! paths into the project (backing up what was there) and persists the config.

use crate::config::{
    load_config, save_config, AppType, DomainType, EnvironmentType, LanguageType, ProjectConfig,
    ResourceType,
};
use crate::constants::{
    ANALYSIS_FILE, ANALYSIS_TEMPLATE_DIR, API_PARAMETERS_TEMPLATE, CONFIG_FILE, ENV_TEMPLATE_DIR,
    FUNCTION_APP_TYPESCRIPT_BRANCH, MANAGED_DIRS,
};
use crate::error::{Error, Result};
use crate::fs::{backup_and_replace, copy_tree};
use crate::github::{failure_checklist, failure_report, onboarding_ticket, GitHub};
use crate::loader::{loader_for, TemplateSource};
use crate::process::ProcessRunner;
use crate::prompt::{select_value, Prompter};
use crate::renderer::TemplateRenderer;
use crate::settings::Settings;
use crate::template::{FileError, TemplateEngine, TemplateOperation};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Options of `switch init`, validated by the CLI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub domain: Option<DomainType>,
    pub app_type: Option<AppType>,
    pub language: Option<LanguageType>,
    pub github_org: Option<String>,
    pub base: Option<String>,
    pub branch: Option<String>,
    pub resources: Vec<ResourceType>,
    pub port: Option<u16>,
    pub skip_tickets: bool,
}

/// Workflow stages, logged as the onboarding progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadExistingConfig,
    ConfirmOverwrite,
    CollectMissingFields,
    ResolveOrganization,
    PullCoreTemplate,
    ApplyEnvironmentTemplates,
    ApplyAnalysisTemplate,
    MaterializeProject,
    PersistConfig,
    ReportTemplateFailures,
    FileOnboardingTicket,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Outcome of a completed onboarding.
#[derive(Debug)]
pub struct OnboardingReport {
    pub config: ProjectConfig,
    /// Every file that failed to render, core template first, paths relative
    /// to the project
    pub failures: Vec<FileError>,
    /// Pre-existing project paths that were moved aside
    pub backups: Vec<PathBuf>,
    /// URL of the template failure issue, if one was filed
    pub failure_issue: Option<String>,
    /// URL of the onboarding ticket, if one was filed
    pub onboarding_ticket: Option<String>,
}

/// Branch of the core template to clone.
///
/// An explicit branch always wins. Otherwise the application type code is used,
/// except for Node Function Apps on the default template repository which use
/// the TypeScript branch.
pub fn template_branch(
    app_type: AppType,
    language: Option<LanguageType>,
    explicit: Option<&str>,
    default_repository: bool,
) -> String {
    if let Some(branch) = explicit.filter(|b| !b.trim().is_empty()) {
        return branch.to_string();
    }
    if default_repository
        && app_type == AppType::FunctionApp
        && language == Some(LanguageType::Node)
    {
        return FUNCTION_APP_TYPESCRIPT_BRANCH.to_string();
    }
    app_type.code().to_string()
}

/// Template paths left out when applying the environment template.
pub fn environment_exclusions(app_type: Option<AppType>, env_type: EnvironmentType) -> Vec<String> {
    if app_type == Some(AppType::StaticWebApp) || env_type == EnvironmentType::CI {
        vec![API_PARAMETERS_TEMPLATE.to_string()]
    } else {
        Vec::new()
    }
}

/// Drives `switch init` for one project directory.
pub struct Onboarder<'a> {
    prompter: &'a dyn Prompter,
    runner: &'a dyn ProcessRunner,
    renderer: &'a dyn TemplateRenderer,
    settings: &'a Settings,
}

impl<'a> Onboarder<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        runner: &'a dyn ProcessRunner,
        renderer: &'a dyn TemplateRenderer,
        settings: &'a Settings,
    ) -> Self {
        Self { prompter, runner, renderer, settings }
    }

    fn enter(&self, stage: Stage) {
        debug!("Onboarding stage: {stage}");
    }

    /// Runs the whole workflow.
    ///
    /// # Errors
    /// * `Error::UserAbort` if the user declines to overwrite an existing Switchfile
    /// * `Error::IoError`, `Error::ProcessError` and friends for fatal failures
    pub fn run(&self, project_dir: &Path, options: &InitOptions) -> Result<OnboardingReport> {
        let mut config = initial_config(project_dir, options)?;
        println!("\nProject: {}\n", config.name);

        self.enter(Stage::LoadExistingConfig);
        let config_path = project_dir.join(CONFIG_FILE);
        let existing = load_config(&config_path)?;

        if existing.is_some() {
            self.enter(Stage::ConfirmOverwrite);
            let overwrite = self.prompter.confirm(
                "This project/folder is already enabled with Switch. Overwrite configuration?",
                false,
            )?;
            if !overwrite {
                return Err(Error::UserAbort("Operation cancelled by user.".to_string()));
            }
        }

        self.enter(Stage::CollectMissingFields);
        self.collect_missing(&mut config)?;

        self.enter(Stage::ResolveOrganization);
        let organization = self.resolve_organization(&config, options.github_org.as_deref())?;
        config.assign_repository(&organization);

        if let Some(existing) = &existing {
            let regenerate = self
                .prompter
                .confirm("Would you like to overwrite the hooks and re-generate?", false)?;
            carry_over(existing, &mut config, regenerate, options);
        }

        let workspace = tempfile::Builder::new().prefix("switch-").tempdir()?;
        let generated = workspace.path().join("project");
        debug!("Generating into '{}'", generated.display());
        let engine = TemplateEngine::new(self.renderer);

        self.enter(Stage::PullCoreTemplate);
        let source = options
            .base
            .as_deref()
            .map(TemplateSource::from_string)
            .unwrap_or_else(|| TemplateSource::GitHub(self.settings.template_repository.clone()));
        let default_template = source.identifier() == self.settings.template_repository;
        let app_type = config
            .app_type
            .ok_or_else(|| Error::ValidationError("an application type is required".to_string()))?;
        let branch = template_branch(
            app_type,
            config.language,
            options.branch.as_deref(),
            default_template,
        );
        println!("\nCloning {source} ({branch})...\n");
        let cloned = loader_for(self.runner, &source, &branch).load(&generated)?;
        let core_failures =
            relocate(engine.render_in_place(&cloned, &config.template_data()?), &generated);
        let mut local_failures = Vec::new();

        self.enter(Stage::ApplyEnvironmentTemplates);
        for env_type in config.auto_register_environments() {
            println!("Auto registering {env_type} environment...");
        }
        let env_templates = self.settings.templates_dir.join(ENV_TEMPLATE_DIR);
        for environment in &config.environments {
            let operation = TemplateOperation::new(&env_templates, &generated)
                .with_substitution("env", environment.name.clone())
                .with_data(config.environment_data(environment)?)
                .with_exclusions(environment_exclusions(config.app_type, environment.env_type));
            local_failures.extend(relocate(engine.apply(&operation)?, &generated));
        }

        if config.language.is_none_or(|language| language.uses_analysis_template()) {
            self.enter(Stage::ApplyAnalysisTemplate);
            let operation = TemplateOperation::new(
                self.settings.templates_dir.join(ANALYSIS_TEMPLATE_DIR),
                &generated,
            )
            .with_data(config.template_data()?);
            local_failures.extend(relocate(engine.apply(&operation)?, &generated));
        }

        self.enter(Stage::MaterializeProject);
        let backups = materialize(&generated, project_dir)?;

        self.enter(Stage::PersistConfig);
        println!("\nSaving {CONFIG_FILE}...\n");
        save_config(&config_path, &config)?;

        let failure_issue = if core_failures.is_empty() && local_failures.is_empty() {
            None
        } else {
            self.enter(Stage::ReportTemplateFailures);
            self.report_failures(&config, &core_failures, &local_failures, default_template)?
        };

        let onboarding_ticket = if options.skip_tickets {
            None
        } else {
            self.enter(Stage::FileOnboardingTicket);
            println!("\nCreating onboarding ticket...\n");
            let issue = onboarding_ticket(&config, &self.settings.onboarding_repository);
            let url = GitHub::new(self.runner).create_issue(&issue)?;
            println!("Issue created successfully: {url}");
            Some(url)
        };

        self.enter(Stage::Done);
        let mut failures = core_failures;
        failures.extend(local_failures);
        Ok(OnboardingReport { config, failures, backups, failure_issue, onboarding_ticket })
    }

    fn collect_missing(&self, config: &mut ProjectConfig) -> Result<()> {
        if config.domain.is_none() {
            config.domain = Some(select_value(
                self.prompter,
                "Select the domain that owns this project",
                &DomainType::ALL,
            )?);
        }
        if config.app_type.is_none() {
            config.app_type = Some(select_value(
                self.prompter,
                "Select the Switch application type",
                &AppType::ALL,
            )?);
        }
        if config.language.is_none() {
            config.language = Some(select_value(
                self.prompter,
                "Select the language / framework used",
                &LanguageType::ALL,
            )?);
        }
        if config.app_type == Some(AppType::ContainerApp) && config.port.is_none() {
            let port =
                self.prompter.number("Please provide the port your service will be running")?;
            if port == 0 {
                return Err(Error::ValidationError("port must be between 1 and 65535".to_string()));
            }
            config.port = Some(port);
        }
        Ok(())
    }

    fn resolve_organization(&self, config: &ProjectConfig, explicit: Option<&str>) -> Result<String> {
        if let Some(org) = explicit.map(str::trim).filter(|org| !org.is_empty()) {
            return Ok(org.to_string());
        }

        let domain = config
            .domain
            .ok_or_else(|| Error::ValidationError("a domain is required".to_string()))?;
        if let Some(org) = domain.organization() {
            return Ok(org);
        }

        let orgs = GitHub::new(self.runner).org_list()?;
        if orgs.is_empty() {
            return Err(Error::ValidationError(
                "no GitHub organizations are available to this account".to_string(),
            ));
        }
        let index = self.prompter.select("Select the github owner repo", &orgs, 0)?;
        orgs.get(index)
            .cloned()
            .ok_or_else(|| Error::ValidationError(format!("invalid organization choice {index}")))
    }

    /// Prints every failure. Only failures of the default core template are
    /// offered as an issue against the template repository.
    fn report_failures(
        &self,
        config: &ProjectConfig,
        core_failures: &[FileError],
        local_failures: &[FileError],
        default_template: bool,
    ) -> Result<Option<String>> {
        let all: Vec<&FileError> = core_failures.iter().chain(local_failures).collect();
        let files: Vec<String> = all.iter().map(|f| f.file.display().to_string()).collect();
        let checklist: Vec<String> = [core_failures, local_failures]
            .into_iter()
            .filter(|failures| !failures.is_empty())
            .map(failure_checklist)
            .collect();
        println!(
            "\nThe following template files were unable to be processed.\n\n{}\n\n{}\n\nThe files are available for your manual review",
            files.join("\n"),
            checklist.join("\n")
        );

        if !default_template || core_failures.is_empty() {
            return Ok(None);
        }

        println!(
            "However, you could also report this as an issue to the Switch CI/CD Team to review as well."
        );
        if !self.prompter.confirm("Would you like to report this issue now?", false)? {
            return Ok(None);
        }
        let issue = failure_report(config, core_failures, &self.settings.template_repository);
        let url = GitHub::new(self.runner).create_issue(&issue)?;
        println!("Issue created successfully: {url}");
        Ok(Some(url))
    }
}

fn initial_config(project_dir: &Path, options: &InitOptions) -> Result<ProjectConfig> {
    let absolute = if project_dir.is_absolute() {
        project_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(project_dir)
    };
    let name = absolute
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .next_back()
        .ok_or_else(|| {
            Error::ValidationError(format!("cannot derive a project name from '{}'", absolute.display()))
        })?;

    let mut config = ProjectConfig::new(name);
    config.domain = options.domain;
    config.app_type = options.app_type;
    config.language = options.language;
    config.port = options.port;
    config.resources = options.resources.clone();
    Ok(config)
}

/// Rewrites failure paths relative to the generated workspace, which is the
/// layout they end up with in the project.
fn relocate(failures: Vec<FileError>, generated: &Path) -> Vec<FileError> {
    failures.into_iter().map(|failure| failure.relative_to(generated)).collect()
}

/// Keeps what the user configured before: hooks unless regenerating, plus the
/// registered environments and, when none were given, the resources.
fn carry_over(
    existing: &ProjectConfig,
    config: &mut ProjectConfig,
    regenerate_hooks: bool,
    options: &InitOptions,
) {
    if !regenerate_hooks {
        config.hooks = existing.hooks.clone();
    }
    if config.environments.is_empty() {
        config.environments = existing.environments.clone();
    }
    if options.resources.is_empty() {
        config.resources = existing.resources.clone();
    }
}

/// Moves the managed paths from the generated workspace into the project.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - backups made of pre-existing project paths
pub fn materialize(generated: &Path, project_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut backups = Vec::new();
    for name in MANAGED_DIRS.iter().chain(std::iter::once(&ANALYSIS_FILE)) {
        let source = generated.join(name);
        if !source.exists() {
            debug!("Template did not provide '{name}'");
            continue;
        }
        let backup = backup_and_replace(project_dir.join(name), |dest| copy_tree(&source, dest))?;
        if let Some(backup) = backup {
            println!("Existing '{}' moved to '{}'", name, backup.display());
            backups.push(backup);
        }
    }
    Ok(backups)
}
