//! mycli library: argument definitions, configuration and command
//! implementations.

/// Command-line argument definitions.
pub mod cli;
/// Subcommand implementations.
pub mod commands;
/// Configuration: read `config.toml`.
pub mod config;
pub mod logging;
