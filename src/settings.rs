//! Runtime settings, resolved once at start-up and passed down explicitly.

use crate::constants::{DEFAULT_TEMPLATE_REPOSITORY, ONBOARDING_REPOSITORY};
use log::debug;
use std::path::PathBuf;

/// Overrides the default template repository
pub const TEMPLATE_REPOSITORY_ENV: &str = "SWITCH_TEMPLATE_REPOSITORY";
/// Overrides the onboarding ticket repository
pub const ONBOARDING_REPOSITORY_ENV: &str = "SWITCH_ONBOARDING_REPOSITORY";
/// Overrides the local templates directory
pub const TEMPLATES_DIR_ENV: &str = "SWITCH_TEMPLATES_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Core CI/CD template repository (`OWNER/REPO`)
    pub template_repository: String,
    /// Repository receiving onboarding tickets
    pub onboarding_repository: String,
    /// Directory holding the `env/` and `sonar/` templates
    pub templates_dir: PathBuf,
}

impl Settings {
    /// Resolves settings from the environment, falling back to the defaults.
    ///
    /// The templates directory defaults to `~/.switch-cli/templates` when it
    /// exists, otherwise `./templates`.
    pub fn from_env() -> Self {
        let templates_dir = std::env::var_os(TEMPLATES_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_templates_dir);

        let settings = Self {
            template_repository: std::env::var(TEMPLATE_REPOSITORY_ENV)
                .unwrap_or_else(|_| DEFAULT_TEMPLATE_REPOSITORY.to_string()),
            onboarding_repository: std::env::var(ONBOARDING_REPOSITORY_ENV)
                .unwrap_or_else(|_| ONBOARDING_REPOSITORY.to_string()),
            templates_dir,
        };
        debug!("Resolved settings: {settings:?}");
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_repository: DEFAULT_TEMPLATE_REPOSITORY.to_string(),
            onboarding_repository: ONBOARDING_REPOSITORY.to_string(),
            templates_dir: default_templates_dir(),
        }
    }
}

fn default_templates_dir() -> PathBuf {
    let home_templates = dirs::home_dir().map(|home| home.join(".switch-cli").join("templates"));
    match home_templates {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from("templates"),
    }
}
