use std::io::Write;

use anyhow::Result;

use crate::config::Config;

/// Print `mycli version <v>`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run_version(config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "mycli version {}", config.version())?;
    Ok(())
}
