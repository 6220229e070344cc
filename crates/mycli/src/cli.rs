use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use time_utils::Layout;

#[derive(Debug, Parser)]
#[command(name = "mycli", about = "my cli tool")]
pub struct Cli {
    /// config file (default is ./configs/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// IANA timezone to read and print datetimes in, overriding the config
    #[arg(long, global = true, value_name = "ZONE")]
    pub timezone: Option<String>,

    /// More log output; repeat for more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the version number of mycli
    Version,
    /// Generate TypeScript files
    GenTs {
        /// Game ID
        #[arg(long, alias = "gameId")]
        game_id: String,
    },
    /// Calendar and time helpers
    #[command(subcommand)]
    Time(TimeCommand),
    /// File helpers
    #[command(subcommand)]
    Fs(FsCommand),
}

#[derive(Debug, Subcommand)]
pub enum TimeCommand {
    /// Print the current time
    Now {
        /// Named layout to print with
        #[arg(long)]
        layout: Option<Layout>,
        /// Print seconds since the Unix epoch instead
        #[arg(long, conflicts_with = "layout")]
        unix: bool,
    },
    /// Re-render a datetime with another layout or a strftime pattern
    Format {
        datetime: String,
        #[arg(long)]
        layout: Option<Layout>,
        #[arg(long, conflicts_with = "layout")]
        pattern: Option<String>,
    },
    /// Print the first and last instant of the period containing a datetime
    Period {
        datetime: String,
        #[arg(long, value_enum, default_value_t = Unit::Day)]
        unit: Unit,
    },
    /// Print every day from START to END, inclusive
    Range { start: String, end: String },
    /// Describe a datetime relative to now, e.g. 3分钟前
    Relative {
        datetime: String,
        /// Reference instant instead of the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Render a number of seconds as a duration, e.g. 1小时1分钟
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Show a datetime in another timezone, as JSON
    Convert {
        datetime: String,
        /// Target IANA timezone
        #[arg(long, value_name = "ZONE")]
        to: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Unit {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

#[derive(Debug, Subcommand)]
pub enum FsCommand {
    /// Copy a file, creating the destination's directories
    Copy { src: PathBuf, dst: PathBuf },
    /// List every file under a directory
    Ls { dir: PathBuf },
    /// Remove a file or directory tree
    Rm { path: PathBuf },
    /// Print a file's contents
    Cat { path: PathBuf },
}
