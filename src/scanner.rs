//! Source-root scanning for matching directories.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Find the immediate subdirectories of `source_root` whose name contains
/// `pattern` (case-insensitive).
///
/// Only one directory level is examined; deeper matches are never returned.
/// Paths come back in filesystem enumeration order, not sorted. A missing or
/// unreadable source root yields an empty list.
#[must_use]
pub fn find_game_paths(source_root: &Path, pattern: &str) -> Vec<PathBuf> {
    let pattern = pattern.to_lowercase();
    let mut paths = Vec::new();

    for entry in WalkDir::new(source_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .flatten()
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.contains(&pattern) {
            paths.push(entry.into_path());
        }
    }

    debug!(
        root = %source_root.display(),
        matches = paths.len(),
        "scan complete"
    );
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_matching_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("alpha_game")).unwrap();
        fs::create_dir(temp.path().join("beta_tool")).unwrap();

        let paths = find_game_paths(temp.path(), "game");
        assert_eq!(paths, vec![temp.path().join("alpha_game")]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Game_Extra")).unwrap();
        fs::create_dir(temp.path().join("MYGAMES")).unwrap();

        let paths = find_game_paths(temp.path(), "game");
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_ignores_nested_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("projects/nested_game")).unwrap();

        let paths = find_game_paths(temp.path(), "game");
        assert!(paths.is_empty());
    }

    #[test]
    fn test_ignores_plain_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes_game"), b"not a directory").unwrap();

        let paths = find_game_paths(temp.path(), "game");
        assert!(paths.is_empty());
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let paths = find_game_paths(Path::new("/nonexistent/source"), "game");
        assert!(paths.is_empty());
    }
}
