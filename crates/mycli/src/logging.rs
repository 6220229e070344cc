//! `env_logger` setup.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// The level implied by `-v`/`-q`, or `configured` when neither is given.
pub fn level(verbose: u8, quiet: bool, configured: LevelFilter) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => configured,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` still wins over `default`.
pub fn init(default: LevelFilter) {
    let env = Env::default().default_filter_or(default.as_str());
    // A logger is already installed when called twice; keep the first.
    let _ = Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
