//! CLI interface for trade-stats
//!
//! `trade-stats [OPTIONS] <INPUT> <OUTPUT>`: aggregate a trade file into a
//! per-symbol summary report.

mod aggregate;

pub use aggregate::AggregateArgs;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trade-stats")]
#[command(about = "Per-symbol trade statistics: max time gap, volume, VWAP and max price")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub args: AggregateArgs,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config)
    #[arg(long)]
    pub log_level: Option<String>,
}
