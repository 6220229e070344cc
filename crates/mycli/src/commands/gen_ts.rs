use std::io::Write;

use anyhow::{bail, Result};
use log::info;

/// Generate the TypeScript files for `game_id`. Only announces itself for now.
///
/// # Errors
///
/// Returns an error if `game_id` is blank or `out` cannot be written.
pub fn run_gen_ts(game_id: &str, out: &mut impl Write) -> Result<()> {
    if game_id.trim().is_empty() {
        bail!("--game-id must not be empty");
    }
    info!("generating TypeScript files for game {game_id}");
    writeln!(out, "gen-ts")?;
    Ok(())
}
