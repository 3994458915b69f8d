//! Configuration for a staging run.
//!
//! The defaults reproduce the fixed behavior of the tool (scan for "game",
//! strip "_game", build `.go` files with `go build`); a TOML config file can
//! override any of them. The file is optional and never created implicitly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/gamestage/config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Scan section (directory matching and name derivation).
    #[serde(default)]
    pub scan: ScanConfig,

    /// Build section (source lookup and build command).
    #[serde(default)]
    pub build: BuildConfig,
}

/// Directory matching and name derivation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Substring a directory name must contain (case-insensitive) to match.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Substring removed from matched directory names to derive staged names.
    #[serde(default = "default_strip_pattern")]
    pub strip_pattern: String,
}

/// Source lookup and build command settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// File name suffix identifying the source file to build.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Build command invoked on the source file, shell-quoted.
    #[serde(default = "default_command")]
    pub command: String,
}

fn default_pattern() -> String {
    "game".to_string()
}

fn default_strip_pattern() -> String {
    "_game".to_string()
}

fn default_source_extension() -> String {
    ".go".to_string()
}

fn default_command() -> String {
    "go build".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            strip_pattern: default_strip_pattern(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            command: default_command(),
        }
    }
}

impl Config {
    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Default configuration file location under the home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.scan.pattern, "game");
        assert_eq!(config.scan.strip_pattern, "_game");
        assert_eq!(config.build.source_extension, ".go");
        assert_eq!(config.build.command, "go build");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.scan.pattern, "game");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[build]\ncommand = \"gccgo\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.build.command, "gccgo");
        // Unspecified sections keep their defaults
        assert_eq!(config.build.source_extension, ".go");
        assert_eq!(config.scan.pattern, "game");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
