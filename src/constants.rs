//! Common constants used throughout the Switch CLI.

/// Name of the persisted project configuration file
pub const CONFIG_FILE: &str = "Switchfile";

/// Template repository used when `--base` is not given
pub const DEFAULT_TEMPLATE_REPOSITORY: &str = "FA-Switch-Platform/Switch-CICD-Template";

/// Repository receiving onboarding tickets
pub const ONBOARDING_REPOSITORY: &str = "FA-Switch-Platform/CICD";

/// Directories copied from the generated workspace into the project
pub const MANAGED_DIRS: [&str; 2] = [".github", "scripts"];

/// Static-analysis configuration file copied into the project
pub const ANALYSIS_FILE: &str = "sonar-project.properties";

/// Sub-directory of the local templates holding per-environment files
pub const ENV_TEMPLATE_DIR: &str = "env";

/// Sub-directory of the local templates holding the static-analysis template
pub const ANALYSIS_TEMPLATE_DIR: &str = "sonar";

/// Per-environment API parameter file, not used by Static Web Apps or CI
pub const API_PARAMETERS_TEMPLATE: &str = ".github/environment/[env]-parameters-api.bicepparam";

/// Branch used for Node Function Apps on the default template repository
pub const FUNCTION_APP_TYPESCRIPT_BRANCH: &str = "fa-typescript";

/// Issue labels
pub const DEFECT_LABEL: &str = "defect";
pub const ONBOARDING_LABEL: &str = "Onboarding";
