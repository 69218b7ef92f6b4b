//! File tree operations used while materializing templates.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every file below `dir`, recursively.
///
/// Directories are traversed but not listed. Entries are sorted by file name
/// within each directory so the order is stable across runs.
///
/// # Errors
/// * `Error::IoError` (NotFound) if `dir` does not exist or is not a directory
/// * `Error::WalkError` if a sub-directory cannot be read
pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::IoError(io::Error::new(
            io::ErrorKind::NotFound,
            format!("directory '{}' does not exist", dir.display()),
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Copies `source` to `dest`, creating any missing parent directories.
pub fn copy_file<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D) -> Result<()> {
    let dest = dest.as_ref();
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::copy(source.as_ref(), dest).map(|_| ()).map_err(Error::IoError)
}

/// Recursively copies a directory (or a single file) from `source` to `dest`.
pub fn copy_tree<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    if source.is_file() {
        return copy_file(source, dest);
    }

    for file in list_files(source)? {
        let relative = file.strip_prefix(source).map_err(|e| {
            Error::IoError(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
        })?;
        copy_file(&file, dest.join(relative))?;
    }
    Ok(())
}

/// Backup location for `path`: `.old-<name>` for directories, `old-<name>` for files.
pub fn backup_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let backup_name =
        if path.is_dir() { format!(".old-{name}") } else { format!("old-{name}") };
    path.with_file_name(backup_name)
}

fn remove_path(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Moves an existing `path` out of the way, then materializes new content there.
///
/// A previous backup with the same name is replaced. The original content is
/// never deleted outright: it is renamed to [`backup_path`] before `provider`
/// writes the new content.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - the backup location, if `path` existed
pub fn backup_and_replace<P, F>(path: P, provider: F) -> Result<Option<PathBuf>>
where
    P: AsRef<Path>,
    F: FnOnce(&Path) -> Result<()>,
{
    let path = path.as_ref();
    let backup = if path.symlink_metadata().is_ok() {
        let backup = backup_path(path);
        if backup.symlink_metadata().is_ok() {
            debug!("Replacing previous backup '{}'", backup.display());
            remove_path(&backup)?;
        }
        debug!("Backing up '{}' to '{}'", path.display(), backup.display());
        fs::rename(path, &backup)?;
        Some(backup)
    } else {
        None
    };

    provider(path)?;
    Ok(backup)
}

/// Removes the `.git` directory of a freshly cloned template, if any.
pub fn remove_vcs_metadata<P: AsRef<Path>>(dir: P) -> Result<()> {
    let git_dir = dir.as_ref().join(".git");
    if git_dir.exists() {
        debug!("Removing '{}'", git_dir.display());
        fs::remove_dir_all(&git_dir)?;
    }
    Ok(())
}
