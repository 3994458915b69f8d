#![warn(missing_docs)]
// Allow pedantic strict lints that create false positives in this codebase
#![allow(clippy::arithmetic_side_effects)] // Simple counters cannot overflow

//! # Gamestage - Game Directory Staging and Build Runner
//!
//! Gamestage scans a source root for game directories, copies each into a
//! staging area under a cleaned-up name, compiles the first source file it
//! finds in each staged copy, and records a JSON manifest of the run.
//!
//! ## Pipeline
//!
//! A run is a single linear pass:
//!
//! 1. [`scanner`]: collect immediate subdirectories of the source root whose
//!    name contains the scan pattern (case-insensitive)
//! 2. [`naming`]: derive staged names by stripping the strip pattern
//! 3. [`staging`]: replace-and-copy each match into the target root
//! 4. [`builder`]: run the build command on the first matching source file
//! 5. [`manifest`]: write `metadata.json` listing the staged names
//!
//! ## Example Usage
//!
//! ```no_run
//! use gamestage::{StageContext, pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = StageContext::new("./data".as_ref(), "./staged".as_ref(), None)?;
//! pipeline::execute(&ctx)?;
//! # Ok(())
//! # }
//! ```

/// Build invocation for staged directories.
pub mod builder;

/// Configuration parsing and defaults.
pub mod config;

/// Run manifest written at the end of a staging pass.
pub mod manifest;

/// Derived-name computation for matched directories.
pub mod naming;

/// Output formatting helpers.
pub mod output;

/// Pipeline orchestration (the single top-level operation).
pub mod pipeline;

/// Source-root scanning for matching directories.
pub mod scanner;

/// Replace-and-copy staging of matched directories.
pub mod staging;

/// Path helpers.
pub mod utils;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Current version of the gamestage binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Central context for a staging run.
///
/// Holds the resolved source and target roots plus the loaded configuration.
/// Both roots are absolute; the target root is created lazily via
/// [`StageContext::ensure_target_exists`].
#[derive(Debug, Clone)]
pub struct StageContext {
    /// Absolute path of the directory scanned for games.
    pub source_root: PathBuf,

    /// Absolute path of the directory staged copies are written to.
    pub target_root: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl StageContext {
    /// Creates a new `StageContext`, resolving both roots to absolute paths
    /// and loading configuration from `config_path` (or the default location
    /// when `None`).
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined or the
    /// configuration file cannot be read or parsed.
    pub fn new(source: &Path, target: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => config::Config::default_path()?,
        };
        let config = config::Config::load(&config_path)?;

        Ok(Self {
            source_root: utils::make_absolute(source)?,
            target_root: utils::make_absolute(target)?,
            config,
        })
    }

    /// Creates a new `StageContext` with an explicit configuration.
    /// This avoids filesystem config lookup in tests.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn new_with_config(source: &Path, target: &Path, config: config::Config) -> Result<Self> {
        Ok(Self {
            source_root: utils::make_absolute(source)?,
            target_root: utils::make_absolute(target)?,
            config,
        })
    }

    /// Ensures that the target root directory exists, creating it and any
    /// intermediate directories if missing.
    ///
    /// # Errors
    /// Returns an error if the directories cannot be created.
    pub fn ensure_target_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.target_root).with_context(|| {
            format!(
                "Failed to create target directory: {}",
                self.target_root.display()
            )
        })
    }
}
