//! File exclusion handling for template operations.
//! User patterns are literal strings matched anywhere in a template path; a small
//! built-in glob set keeps VCS and OS metadata out of generated projects.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use regex::RegexSet;

/// Paths that are never copied from a template root.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 4] =
    [".git/**", "**/.git/**", "**/.DS_Store", "**/Thumbs.db"];

/// Compiled exclusion rules for one template operation.
#[derive(Debug, Clone)]
pub struct ExclusionMatcher {
    patterns: RegexSet,
    defaults: GlobSet,
}

impl ExclusionMatcher {
    /// Compiles `patterns` as literal substrings.
    ///
    /// # Errors
    /// * `Error::ExclusionPatternError` if the compiled set exceeds the regex size limits
    /// * `Error::IgnorePatternError` if the built-in globs fail to compile
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let escaped = patterns.iter().map(|p| regex::escape(&p.as_ref().replace('\\', "/")));
        let patterns = RegexSet::new(escaped)?;

        let mut builder = GlobSetBuilder::new();
        for pattern in DEFAULT_IGNORE_PATTERNS {
            builder.add(Glob::new(pattern)?);
        }
        let defaults = builder.build()?;

        Ok(Self { patterns, defaults })
    }

    /// Returns true if any user pattern occurs in `path`.
    pub fn is_excluded(&self, path: &str) -> bool {
        let normalized = path.replace('\\', "/");
        let excluded = self.patterns.is_match(&normalized);
        if excluded {
            debug!("Excluding '{normalized}'");
        }
        excluded
    }

    /// Returns true if the template-relative `path` is VCS or OS metadata.
    pub fn is_ignored_by_default(&self, relative_path: &str) -> bool {
        self.defaults.is_match(relative_path)
    }
}

/// One-shot form of [`ExclusionMatcher::is_excluded`].
///
/// Returns false for an empty pattern list, or if the patterns fail to compile.
pub fn is_excluded<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    ExclusionMatcher::new(patterns).is_ok_and(|matcher| matcher.is_excluded(path))
}
