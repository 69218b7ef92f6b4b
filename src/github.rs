//! GitHub integration through the `gh` CLI: issues, organizations and the
//! bodies of onboarding tickets and template failure reports.

use crate::config::{AppType, ProjectConfig};
use crate::constants::{DEFECT_LABEL, ONBOARDING_LABEL};
use crate::error::{Error, Result};
use crate::process::{invoke, ProcessRunner};
use crate::template::FileError;
use log::debug;

/// An issue ready to be filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub repository: String,
    pub title: String,
    pub body: String,
    pub label: String,
}

/// Thin wrapper around `gh`.
pub struct GitHub<'a> {
    runner: &'a dyn ProcessRunner,
}

impl<'a> GitHub<'a> {
    pub fn new(runner: &'a dyn ProcessRunner) -> Self {
        Self { runner }
    }

    /// Files `issue` and returns the URL printed by `gh`.
    pub fn create_issue(&self, issue: &Issue) -> Result<String> {
        debug!("Creating issue '{}' in {}", issue.title, issue.repository);
        invoke(
            self.runner,
            "gh",
            &[
                "issue",
                "create",
                "--repo",
                &issue.repository,
                "--title",
                &issue.title,
                "--body",
                &issue.body,
                "--label",
                &issue.label,
            ],
        )
        .map_err(|message| Error::process("gh", format!("Failed to create issue: {message}")))
    }

    /// Organizations the logged-in user belongs to.
    pub fn org_list(&self) -> Result<Vec<String>> {
        let stdout = invoke(self.runner, "gh", &["org", "list"])
            .map_err(|message| Error::process("gh", format!("Failed to list organizations: {message}")))?;
        Ok(stdout.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }
}

/// Escapes characters that would break the markdown table of an issue body.
pub fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '&' => escaped.push_str("\\x26"),
            '\'' => escaped.push_str("\\x27"),
            '"' => escaped.push_str("\\x22"),
            '<' => escaped.push_str("\\x3C"),
            '>' => escaped.push_str("\\x3E"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn properties_table(config: &ProjectConfig) -> String {
    let app_type = config.app_type.map(|t| t.code()).unwrap_or_default();
    let language = config.language.map(|l| l.code()).unwrap_or_default();
    format!(
        "| Property | Value |\n\
         |----------|-------|\n\
         |Name:     | {name} |\n\
         |Org:      | {repo} |\n\
         |Type:     | {app_type} |\n\
         |Language: | {language} |\n\
         |Repository: | {repo} |",
        name = config.name,
        repo = config.repository,
    )
}

/// Checklist lines, one per failed file.
pub fn failure_checklist(failures: &[FileError]) -> String {
    failures
        .iter()
        .map(|f| format!("- [ ] {} - {}", f.file.display(), escape(&f.error.to_string())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Issue reporting template files that failed to render.
pub fn failure_report(config: &ProjectConfig, failures: &[FileError], repository: &str) -> Issue {
    Issue {
        repository: repository.to_string(),
        title: format!("Switch CLI Template Generation Failed - Project {}", config.name),
        body: format!(
            "Failed to generate certain files, probable template issue?\n\n{}\n\n##    Failed Files:\n\n{}",
            properties_table(config),
            failure_checklist(failures)
        ),
        label: DEFECT_LABEL.to_string(),
    }
}

/// Ticket asking the platform team to onboard a new project.
pub fn onboarding_ticket(config: &ProjectConfig, repository: &str) -> Issue {
    let app_type_name = config.app_type.unwrap_or(AppType::ContainerApp).display_name();
    let mut body = format!(
        "New {app_type_name} Onboarding Request\n\n{}\n\nOnboarding Tasks Pending",
        properties_table(config)
    );
    if config.app_type == Some(AppType::StaticWebApp) {
        body.push_str(
            "\n- [ ] Enable private endpoint for swa\
             \n- [ ] Register swa to App Gateway in Hub\
             \n- [ ] Register subdomain/endpoint in Front Door(FD)\
             \n- [ ] Enable custom domain SSL/CERTS in FD",
        );
    }

    Issue {
        repository: repository.to_string(),
        title: format!("Onboard {} to Switch CI/CD", config.name),
        body,
        label: ONBOARDING_LABEL.to_string(),
    }
}
