//! Path helpers.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Makes a path absolute, resolving relative paths from the current
/// directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn make_absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let current_dir = std::env::current_dir()?;
        Ok(current_dir.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_is_unchanged() {
        let path = Path::new("/var/games");
        assert_eq!(make_absolute(path).unwrap(), PathBuf::from("/var/games"));
    }

    #[test]
    fn test_relative_path_is_anchored() {
        let resolved = make_absolute(Path::new("games")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("games"));
    }
}
