//! Aggregation engine
//!
//! Per-symbol streaming statistics over trade records:
//! - maximum gap between consecutive timestamps
//! - total volume
//! - volume-weighted average price
//! - maximum price

mod accumulator;
mod engine;
mod shard;
mod types;

pub use accumulator::SymbolAccumulator;
pub use engine::Aggregator;
pub use shard::ShardedAggregator;
pub use types::{ShardError, SummaryRow, TradeRecord};
