//! Ingestion metrics
//!
//! Emitted through the `metrics` facade; they are no-ops until the embedding
//! application installs a recorder.

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Well-formed records fed to the engine
    RecordsIngested,
    /// Malformed lines dropped by the parser
    LinesSkipped,
    /// Summary rows written to the report
    RowsWritten,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Distinct symbols after the last run
    Symbols,
    /// Wall-clock duration of the last run
    RunDurationMs,
}

impl CounterMetric {
    pub fn name(self) -> &'static str {
        match self {
            CounterMetric::RecordsIngested => "tradestats_records_ingested_total",
            CounterMetric::LinesSkipped => "tradestats_lines_skipped_total",
            CounterMetric::RowsWritten => "tradestats_rows_written_total",
        }
    }
}

impl GaugeMetric {
    pub fn name(self) -> &'static str {
        match self {
            GaugeMetric::Symbols => "tradestats_symbols",
            GaugeMetric::RunDurationMs => "tradestats_run_duration_ms",
        }
    }
}

/// Increment a counter
pub fn increment_counter(metric: CounterMetric, value: u64) {
    ::metrics::counter!(metric.name()).increment(value);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    ::metrics::gauge!(metric.name()).set(value);
}
