//! Run manifest written at the end of a staging pass.
//!
//! The manifest records the derived names of every staged game in scan
//! order plus their count. It is written once per run and never mutated
//! afterward; a rerun overwrites the previous file in place.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the manifest inside the target root.
pub const MANIFEST_FILE: &str = "metadata.json";

/// Summary of a staging run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Derived names of all staged games, in scan enumeration order.
    #[serde(rename = "gameNames")]
    pub game_names: Vec<String>,

    /// Number of staged games; always equals `game_names.len()`.
    #[serde(rename = "numberOfGames")]
    pub number_of_games: usize,
}

impl Manifest {
    /// Create a manifest for the given derived names.
    #[must_use]
    pub fn new(game_names: Vec<String>) -> Self {
        let number_of_games = game_names.len();
        Self {
            game_names,
            number_of_games,
        }
    }

    /// Write the manifest as indented JSON to `metadata.json` inside
    /// `target_root`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, target_root: &Path) -> Result<()> {
        let manifest_path = target_root.join(MANIFEST_FILE);
        let data = serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;

        std::fs::write(&manifest_path, data).with_context(|| {
            format!("Failed to write manifest to {}", manifest_path.display())
        })?;

        Ok(())
    }
}
