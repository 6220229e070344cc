//! Configuration management for mycli
//!
//! Loads `config.toml` from, in order of precedence: the `--config` flag,
//! `./configs/config.toml`, and `<config_dir>/mycli/config.toml`. A missing
//! file means defaults; a present but invalid file is an error.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use time_utils::{IanaResolver, Layout, TimezoneResolver};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Version string reported by `mycli version`; the crate version when unset
    pub version: Option<String>,
    /// IANA timezone used to read and print datetimes; the host zone when unset
    pub timezone: Option<String>,
    /// Default layout for reading and printing datetimes
    pub layout: Layout,
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, returning it together with the file it came from.
    ///
    /// An explicit path must exist; the default locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }

        match Self::find_config_file() {
            Some(path) => Ok((Self::load_from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from("configs").join("config.toml");
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("mycli").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(tz) = &self.timezone {
            IanaResolver
                .resolve(tz)
                .with_context(|| format!("Invalid timezone '{tz}' in config"))?;
        }

        self.log_level()?;
        Ok(())
    }

    /// The configured log level.
    pub fn log_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.logging.level)
            .with_context(|| format!("Invalid logging level '{}'", self.logging.level))
    }

    /// The version reported by `mycli version`.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(env!("CARGO_PKG_VERSION"))
    }
}
