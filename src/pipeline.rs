//! Pipeline orchestration.
//!
//! A run executes Scanner → Deriver → (Stager, Builder per match) →
//! Manifest Writer, strictly in sequence. There is no parallelism across
//! matches and no retry; the first filesystem error aborts the run, leaving
//! the target root in whatever state it reached.

use crate::manifest::Manifest;
use crate::{StageContext, builder, naming, output, scanner, staging};
use anyhow::Result;
use tracing::debug;

/// Run the full staging pass described by `ctx`.
///
/// # Errors
///
/// Returns an error on any filesystem failure (copy, delete, create) or if
/// the build command cannot be spawned. Build commands that run and exit
/// non-zero are not errors.
pub fn execute(ctx: &StageContext) -> Result<()> {
    ctx.ensure_target_exists()?;

    let game_paths = scanner::find_game_paths(&ctx.source_root, &ctx.config.scan.pattern);
    let game_names = naming::derive_names(&game_paths, &ctx.config.scan.strip_pattern);

    for (source, name) in game_paths.iter().zip(&game_names) {
        let destination = ctx.target_root.join(name);
        debug!(source = %source.display(), destination = %destination.display(), "staging");

        staging::copy_and_overwrite(source, &destination)?;
        builder::compile_game(&destination, &ctx.config.build)?;
    }

    let manifest = Manifest::new(game_names);
    manifest.save(&ctx.target_root)?;

    output::print_success(&format!(
        "Staged {} game(s) into {}",
        manifest.number_of_games,
        ctx.target_root.display()
    ));
    Ok(())
}
