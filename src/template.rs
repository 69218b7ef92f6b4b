//! Core template processing.
//! Copies a template tree into a destination, resolving path placeholders and
//! rendering contents, while collecting per-file failures instead of aborting.

use crate::error::{Error, Result};
use crate::fs::{copy_file, list_files};
use crate::ignore::ExclusionMatcher;
use crate::path::{normalize_separators, relative_path, resolve_placeholders, Substitutions};
use crate::renderer::TemplateRenderer;
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A file that could not be rendered.
#[derive(Debug)]
pub struct FileError {
    pub file: PathBuf,
    pub error: Error,
}

impl FileError {
    pub fn new<P: Into<PathBuf>>(file: P, error: Error) -> Self {
        Self { file: file.into(), error }
    }

    /// Re-roots `file` relative to `root`; paths outside `root` are kept as is.
    pub fn relative_to(self, root: &Path) -> Self {
        match self.file.strip_prefix(root) {
            Ok(relative) => Self { file: relative.to_path_buf(), error: self.error },
            Err(_) => self,
        }
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.file.display(), self.error)
    }
}

/// One template application: which tree goes where, with which substitutions.
#[derive(Debug, Clone, Default)]
pub struct TemplateOperation {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    pub path_substitutions: Substitutions,
    pub template_data: Option<serde_json::Value>,
    pub exclusions: Vec<String>,
}

impl TemplateOperation {
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(source_root: S, destination_root: D) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            ..Default::default()
        }
    }

    pub fn with_substitution<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.path_substitutions.insert(key.into(), value.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.template_data = Some(data);
        self
    }

    pub fn with_exclusions<S: Into<String>>(mut self, exclusions: impl IntoIterator<Item = S>) -> Self {
        self.exclusions.extend(exclusions.into_iter().map(Into::into));
        self
    }
}

/// Applies templates using a [`TemplateRenderer`] for file contents.
pub struct TemplateEngine<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> TemplateEngine<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    /// Copies `operation.source_root` into `operation.destination_root`.
    ///
    /// Files are processed in listing order. Excluded files are skipped, path
    /// placeholders are resolved against `path_substitutions` and, when
    /// `template_data` is set, each copied file is rendered in place.
    ///
    /// # Returns
    /// * `Result<Vec<FileError>>` - files that failed to render; empty on full success
    ///
    /// # Errors
    /// * `Error::IoError` if the source root cannot be listed or a file cannot be copied
    pub fn apply(&self, operation: &TemplateOperation) -> Result<Vec<FileError>> {
        debug!(
            "Applying template '{}' to '{}'",
            operation.source_root.display(),
            operation.destination_root.display()
        );
        let matcher = ExclusionMatcher::new(&operation.exclusions)?;
        let source_root = normalize_separators(&operation.source_root);
        let destination_root = normalize_separators(&operation.destination_root);

        let mut failures = Vec::new();
        for source in list_files(&operation.source_root)? {
            let normalized = normalize_separators(&source);
            let relative = relative_path(&source_root, &normalized);

            if matcher.is_ignored_by_default(&relative) || matcher.is_excluded(&relative) {
                debug!("Skipping '{relative}'");
                continue;
            }

            let target = PathBuf::from(resolve_placeholders(
                &format!("{}/{}", destination_root.trim_end_matches('/'), relative),
                &operation.path_substitutions,
            ));
            debug!("Copying '{}' to '{}'", normalized, target.display());
            copy_file(&source, &target)?;

            if let Some(data) = &operation.template_data {
                if let Err(error) = self.render_file(&target, data) {
                    warn!("Failed to render '{}': {}", target.display(), error);
                    failures.push(FileError::new(target, error));
                }
            }
        }
        Ok(failures)
    }

    /// Renders already materialized files in place.
    ///
    /// # Returns
    /// * `Vec<FileError>` - one entry per file that failed to render
    pub fn render_in_place(&self, files: &[PathBuf], data: &serde_json::Value) -> Vec<FileError> {
        files
            .iter()
            .filter_map(|file| match self.render_file(file, data) {
                Ok(()) => None,
                Err(error) => {
                    warn!("Failed to render '{}': {}", file.display(), error);
                    Some(FileError::new(file.clone(), error))
                }
            })
            .collect()
    }

    /// Renders one file in place. Binary (non UTF-8) files are left untouched.
    fn render_file(&self, path: &Path, data: &serde_json::Value) -> Result<()> {
        let bytes = fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                debug!("Not rendering binary file '{}'", path.display());
                return Ok(());
            }
        };
        let rendered = self.renderer.render(&content, data)?;
        if rendered != content {
            fs::write(path, rendered)?;
        }
        Ok(())
    }
}
