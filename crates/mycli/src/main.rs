use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser};
use log::info;
use mycli::cli::{Cli, Commands};
use mycli::commands::time::{run_time, Settings};
use mycli::commands::{fs::run_fs, gen_ts::run_gen_ts, version::run_version};
use mycli::config::Config;
use mycli::logging;
use time_utils::{IanaResolver, SystemClock, TimezoneResolver};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = Config::load(cli.config.as_deref())?;
    logging::init(logging::level(cli.verbose, cli.quiet, config.log_level()?));
    if let Some(path) = &source {
        info!("Using config file: {}", path.display());
    }

    let mut out = io::stdout().lock();
    match cli.command {
        None => Cli::command().write_help(&mut out)?,
        Some(Commands::Version) => run_version(&config, &mut out)?,
        Some(Commands::GenTs { game_id }) => run_gen_ts(&game_id, &mut out)?,
        Some(Commands::Time(cmd)) => {
            let layout = config.layout;
            match cli.timezone.as_deref().or(config.timezone.as_deref()) {
                Some(name) => {
                    let tz = IanaResolver.resolve(name)?;
                    run_time(&cmd, &Settings { tz, layout }, &SystemClock, &mut out)?;
                }
                None => run_time(&cmd, &Settings { tz: Local, layout }, &SystemClock, &mut out)?,
            }
        }
        Some(Commands::Fs(cmd)) => run_fs(&cmd, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
