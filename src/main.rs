use anyhow::Context;
use clap::Parser;
use trade_stats::cli::Cli;
use trade_stats::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(level) = &cli.log_level {
        config.telemetry.log_level = level.clone();
    }

    // Initialize telemetry
    trade_stats::telemetry::init_telemetry(&config.telemetry)?;

    cli.args.execute(&config).await?;

    Ok(())
}
