//! trade-stats: per-symbol statistics over a stream of trades
//!
//! This library provides:
//! - A single-pass aggregation engine keyed by symbol (max timestamp gap,
//!   total volume, VWAP, max price) with exact 128-bit accumulators
//! - Symbol-sharded parallel ingestion on tokio tasks
//! - Trade line parsing and summary report writing
//! - A CLI pipeline wiring the pieces together
//! - Logging and metrics

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod data;
pub mod pipeline;
pub mod telemetry;
