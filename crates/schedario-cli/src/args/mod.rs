mod commands;
mod common;
pub mod hints;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "schedario")]
#[command(
    about = "Browse, print and export MOSI, MOPR and survey record cards",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding the datasets (default: $SCHEDARIO_PATH or the user data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Configuration file (default: <data-dir>/config.toml)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
