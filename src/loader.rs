//! Template source loading.
//! Resolves the core template (`--base`) into a local directory: a GitHub
//! `OWNER/REPO` cloned with `gh`, a full git URL cloned with `git`, or a local
//! directory used as-is (handy while developing templates).
use crate::error::{Error, Result};
use crate::fs::{copy_tree, list_files, remove_vcs_metadata};
use crate::process::{invoke, ProcessRunner};
use log::debug;
use std::path::{Path, PathBuf};
use url::Url;

/// Represents the source location of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// GitHub repository in `OWNER/REPO` form
    GitHub(String),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
    /// Local filesystem template path
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::GitHub(repo) => write!(f, "github repository: '{repo}'"),
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a repository slug, URL or path.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "https" | "http" | "git" | "ssh") {
                return Self::Git(s.to_string());
            }
        }

        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        let path = Path::new(s);
        if path.exists() || s.starts_with('.') || s.starts_with('/') {
            return Self::FileSystem(path.to_path_buf());
        }

        Self::GitHub(s.to_string())
    }

    /// Repository identifier used to compare against the default template.
    pub fn identifier(&self) -> String {
        match self {
            TemplateSource::GitHub(repo) | TemplateSource::Git(repo) => repo.clone(),
            TemplateSource::FileSystem(path) => path.display().to_string(),
        }
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Materializes the template into `destination`.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - every file of the loaded template
    fn load(&self, destination: &Path) -> Result<Vec<PathBuf>>;
}

/// Loader for templates hosted on GitHub, cloned with `gh repo clone`.
pub struct GitHubLoader<'a> {
    runner: &'a dyn ProcessRunner,
    repo: String,
    branch: String,
}

impl<'a> GitHubLoader<'a> {
    pub fn new<R: Into<String>, B: Into<String>>(
        runner: &'a dyn ProcessRunner,
        repo: R,
        branch: B,
    ) -> Self {
        Self { runner, repo: repo.into(), branch: branch.into() }
    }
}

impl TemplateLoader for GitHubLoader<'_> {
    fn load(&self, destination: &Path) -> Result<Vec<PathBuf>> {
        let dest = destination.to_string_lossy();
        debug!("Cloning '{}' ({}) into '{}'", self.repo, self.branch, dest);
        invoke(self.runner, "gh", &["repo", "clone", &self.repo, &dest, "--", "-b", &self.branch])
            .map_err(|message| {
                Error::process("gh", format!("Failed to clone repository {}: {}", self.repo, message))
            })?;
        remove_vcs_metadata(destination)?;
        list_files(destination)
    }
}

/// Loader for templates from git repositories.
pub struct GitLoader<'a> {
    runner: &'a dyn ProcessRunner,
    url: String,
    branch: String,
}

impl<'a> GitLoader<'a> {
    pub fn new<U: Into<String>, B: Into<String>>(
        runner: &'a dyn ProcessRunner,
        url: U,
        branch: B,
    ) -> Self {
        Self { runner, url: url.into(), branch: branch.into() }
    }
}

impl TemplateLoader for GitLoader<'_> {
    fn load(&self, destination: &Path) -> Result<Vec<PathBuf>> {
        let dest = destination.to_string_lossy();
        debug!("Cloning '{}' ({}) into '{}'", self.url, self.branch, dest);
        invoke(
            self.runner,
            "git",
            &["clone", "--depth", "1", "--branch", &self.branch, &self.url, &dest],
        )
        .map_err(|message| {
            Error::process("git", format!("Failed to clone repository {}: {}", self.url, message))
        })?;
        remove_vcs_metadata(destination)?;
        list_files(destination)
    }
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Copies the local template into `destination`, leaving the original untouched.
    ///
    /// # Errors
    /// * `Error::IoError` if the template path does not exist
    fn load(&self, destination: &Path) -> Result<Vec<PathBuf>> {
        let path = self.path.as_ref();
        debug!("Copying local template '{}'", path.display());
        copy_tree(path, destination)?;
        remove_vcs_metadata(destination)?;
        list_files(destination)
    }
}

/// Returns a loader for `source` checking out `branch` where applicable.
pub fn loader_for<'a>(
    runner: &'a dyn ProcessRunner,
    source: &TemplateSource,
    branch: &str,
) -> Box<dyn TemplateLoader + 'a> {
    match source {
        TemplateSource::GitHub(repo) => Box::new(GitHubLoader::new(runner, repo.clone(), branch)),
        TemplateSource::Git(url) => Box::new(GitLoader::new(runner, url.clone(), branch)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path.clone())),
    }
}
