//! Derived-name computation for matched directories.

use std::path::{Path, PathBuf};

/// Derive the staged name for a matched directory by removing every
/// occurrence of `strip_pattern` from its final path component.
///
/// The removal is a plain case-sensitive substring replacement, so a pattern
/// occurring in the middle of a name is stripped too. No uniqueness is
/// enforced; duplicate derived names overwrite each other at the staging
/// step.
#[must_use]
pub fn derive_name(path: &Path, strip_pattern: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.replace(strip_pattern, "")
}

/// Derive staged names for all matched paths, preserving order.
#[must_use]
pub fn derive_names(paths: &[PathBuf], strip_pattern: &str) -> Vec<String> {
    paths
        .iter()
        .map(|path| derive_name(path, strip_pattern))
        .collect()
}
