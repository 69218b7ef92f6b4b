mod common;

use std::fs;

use common::write_file;
use switch_cli::error::Error;
use switch_cli::fs::{backup_and_replace, backup_path, copy_tree, list_files, remove_vcs_metadata};
use tempfile::TempDir;

#[test]
fn test_list_files_is_recursive_and_sorted() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "b.txt", "");
    write_file(temp.path(), "a/z.txt", "");
    write_file(temp.path(), "a/c.txt", "");
    fs::create_dir_all(temp.path().join("empty")).unwrap();

    let files = list_files(temp.path()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|f| f.strip_prefix(temp.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(relative, vec!["a/c.txt", "a/z.txt", "b.txt"]);
}

#[test]
fn test_list_files_of_missing_directory() {
    let temp = TempDir::new().unwrap();
    match list_files(temp.path().join("missing")) {
        Err(Error::IoError(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_backup_path_names() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".github/ci.yml", "");
    write_file(temp.path(), "sonar-project.properties", "");

    assert_eq!(backup_path(temp.path().join(".github")), temp.path().join(".old-.github"));
    assert_eq!(
        backup_path(temp.path().join("sonar-project.properties")),
        temp.path().join("old-sonar-project.properties")
    );
}

#[test]
fn test_backup_and_replace_directory() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("generated/scripts");
    write_file(&source, "build.sh", "new");
    let project = temp.path().join("project");
    write_file(&project, "scripts/build.sh", "old");

    let backup = backup_and_replace(project.join("scripts"), |dest| copy_tree(&source, dest)).unwrap();

    assert_eq!(backup, Some(project.join(".old-scripts")));
    assert_eq!(fs::read_to_string(project.join(".old-scripts/build.sh")).unwrap(), "old");
    assert_eq!(fs::read_to_string(project.join("scripts/build.sh")).unwrap(), "new");
    assert!(!dir_diff::is_different(&source, project.join("scripts")).unwrap());
}

#[test]
fn test_backup_and_replace_replaces_previous_backup() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".old-scripts/stale.sh", "stale");
    write_file(temp.path(), "scripts/build.sh", "current");

    backup_and_replace(temp.path().join("scripts"), |dest| {
        write_file(dest, "build.sh", "next");
        Ok(())
    })
    .unwrap();

    assert!(!temp.path().join(".old-scripts/stale.sh").exists());
    assert_eq!(fs::read_to_string(temp.path().join(".old-scripts/build.sh")).unwrap(), "current");
    assert_eq!(fs::read_to_string(temp.path().join("scripts/build.sh")).unwrap(), "next");
}

#[test]
fn test_backup_and_replace_without_existing_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("sonar-project.properties");

    let backup = backup_and_replace(&target, |dest| Ok(fs::write(dest, "sonar")?)).unwrap();

    assert_eq!(backup, None);
    assert_eq!(fs::read_to_string(target).unwrap(), "sonar");
    assert!(!temp.path().join("old-sonar-project.properties").exists());
}

#[test]
fn test_backup_survives_provider_failure() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), "scripts/build.sh", "keep me");

    let result = backup_and_replace(temp.path().join("scripts"), |_| {
        Err(Error::ValidationError("boom".to_string()))
    });

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(temp.path().join(".old-scripts/build.sh")).unwrap(), "keep me");
}

#[test]
fn test_remove_vcs_metadata() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".git/HEAD", "ref");
    write_file(temp.path(), ".github/ci.yml", "ci");

    remove_vcs_metadata(temp.path()).unwrap();
    remove_vcs_metadata(temp.path()).unwrap();

    assert!(!temp.path().join(".git").exists());
    assert!(temp.path().join(".github/ci.yml").exists());
}
