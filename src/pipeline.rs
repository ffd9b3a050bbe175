//! End-to-end run: trade file in, summary report out

use std::io::{Read, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::aggregate::{Aggregator, ShardedAggregator};
use crate::config::IngestConfig;
use crate::data::{DataError, ReportWriter, TradeReader};
use crate::telemetry::{increment_counter, set_gauge, CounterMetric, GaugeMetric};

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Non-empty input lines consumed
    pub lines_read: u64,
    /// Well-formed records ingested
    pub records: u64,
    /// Malformed lines skipped
    pub skipped: u64,
    /// Distinct symbols
    pub symbols: usize,
    /// Report rows written
    pub rows_written: u64,
    /// Wall-clock duration
    pub elapsed: Duration,
}

/// Ingest every well-formed record with the sequential engine
pub fn aggregate<R: Read>(reader: &mut TradeReader<R>) -> Result<Aggregator, DataError> {
    let mut aggregator = Aggregator::new();
    while let Some(record) = reader.next_record()? {
        aggregator.ingest(&record);
    }
    Ok(aggregator)
}

/// Ingest every well-formed record across `shards` symbol partitions
pub async fn aggregate_sharded<R: Read>(
    reader: &mut TradeReader<R>,
    shards: usize,
    channel_capacity: usize,
) -> anyhow::Result<Aggregator> {
    let sharded = ShardedAggregator::new(shards, channel_capacity);
    while let Some(record) = reader.next_record()? {
        sharded.ingest(record).await?;
    }
    Ok(sharded.finish().await?)
}

/// Write the aggregator's finalized rows, returning the row count
pub fn write_report<W: Write>(aggregator: &Aggregator, sink: W) -> Result<u64, DataError> {
    let mut writer = ReportWriter::new(sink);
    writer.write_all(&aggregator.finalize())?;
    let rows = writer.rows_written();
    writer.finish()?;
    Ok(rows)
}

/// Aggregate `input` and write the report to `output`
///
/// The output file is only created once the input has been fully read.
pub async fn run(input: &Path, output: &Path, config: &IngestConfig) -> anyhow::Result<RunSummary> {
    let started = Instant::now();
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        shards = config.shards,
        "Aggregating trades"
    );

    let mut reader = TradeReader::from_path(input)
        .with_context(|| format!("Failed to open input {}", input.display()))?;

    let aggregator = if config.shards <= 1 {
        aggregate(&mut reader)
            .with_context(|| format!("Failed to read {}", input.display()))?
    } else {
        aggregate_sharded(&mut reader, config.shards, config.channel_capacity)
            .await
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create output {}", output.display()))?;
    let rows_written = write_report(&aggregator, file)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let summary = RunSummary {
        lines_read: reader.lines_read(),
        records: aggregator.records_ingested(),
        skipped: reader.skipped(),
        symbols: aggregator.len(),
        rows_written,
        elapsed: started.elapsed(),
    };

    increment_counter(CounterMetric::RecordsIngested, summary.records);
    increment_counter(CounterMetric::LinesSkipped, summary.skipped);
    increment_counter(CounterMetric::RowsWritten, summary.rows_written);
    set_gauge(GaugeMetric::Symbols, summary.symbols as f64);
    set_gauge(GaugeMetric::RunDurationMs, summary.elapsed.as_secs_f64() * 1000.0);

    tracing::info!(
        records = summary.records,
        skipped = summary.skipped,
        symbols = summary.symbols,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "Report written"
    );

    Ok(summary)
}
