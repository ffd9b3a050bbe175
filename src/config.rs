//! Configuration types for trade-stats

use serde::Deserialize;

use crate::telemetry::LogFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub ingest: IngestConfig,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Ingestion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
    /// Number of symbol shards; 1 runs the sequential engine
    #[serde(default = "default_shards")]
    pub shards: usize,

    /// Bounded channel capacity per shard
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_shards() -> usize {
    1
}
fn default_channel_capacity() -> usize {
    10_000
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            shards: default_shards(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
