//! Aggregate command implementation

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::pipeline::{self, RunSummary};

#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Trade file, one `timestamp,symbol,quantity,price` per line
    pub input: PathBuf,

    /// Report file to create
    pub output: PathBuf,

    /// Number of symbol shards (overrides config)
    #[arg(long)]
    pub shards: Option<usize>,
}

impl AggregateArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<RunSummary> {
        let mut ingest = config.ingest.clone();
        if let Some(shards) = self.shards {
            ingest.shards = shards;
        }

        pipeline::run(&self.input, &self.output, &ingest).await
    }
}
