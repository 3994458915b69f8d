//! Replace-and-copy staging of matched directories.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Recursively copy `source` to `destination`, deleting any existing tree at
/// `destination` first.
///
/// After this returns, `destination` is an exact structural copy of `source`
/// with no stale files left over from a previous run. Errors abort the whole
/// run; there is no partial-failure isolation across directories.
pub fn copy_and_overwrite(source: &Path, destination: &Path) -> Result<()> {
    if destination.exists() {
        fs::remove_dir_all(destination).with_context(|| {
            format!(
                "Failed to remove existing destination: {}",
                destination.display()
            )
        })?;
    }

    let mut copied = 0usize;
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .context("Walked entry outside source tree")?;
        let dest_path = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).with_context(|| {
                format!("Failed to create directory: {}", dest_path.display())
            })?;
        } else {
            fs::copy(entry.path(), &dest_path).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    dest_path.display()
                )
            })?;
            copied += 1;
        }
    }

    debug!(
        source = %source.display(),
        destination = %destination.display(),
        files = copied,
        "staged directory"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_copies_nested_tree() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_file(&source.join("main.go"), "package main");
        write_file(&source.join("assets/sprites/hero.png"), "png");
        fs::create_dir_all(source.join("empty")).unwrap();

        copy_and_overwrite(&source, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("main.go")).unwrap(),
            "package main"
        );
        assert!(dest.join("assets/sprites/hero.png").exists());
        assert!(dest.join("empty").is_dir());
    }

    #[test]
    fn test_removes_stale_destination_files() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_file(&source.join("main.go"), "package main");
        write_file(&dest.join("stale.txt"), "left over");

        copy_and_overwrite(&source, &dest).unwrap();

        assert!(!dest.join("stale.txt").exists());
        assert!(dest.join("main.go").exists());
    }

    #[test]
    fn test_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        let dest = temp.path().join("dest");
        write_file(&source.join("main.go"), "package main");

        copy_and_overwrite(&source, &dest).unwrap();
        copy_and_overwrite(&source, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("main.go")).unwrap(),
            "package main"
        );
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = copy_and_overwrite(&temp.path().join("absent"), &temp.path().join("dest"));
        assert!(result.is_err());
    }
}
