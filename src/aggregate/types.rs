//! Aggregation types

use thiserror::Error;
use tokio::task::JoinError;

/// A single parsed trade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    /// Trade event time (unit is opaque to the engine)
    pub timestamp: i64,
    /// Instrument identifier, never empty
    pub symbol: String,
    /// Trade size
    pub quantity: i64,
    /// Trade price in minor units
    pub price: i64,
}

impl TradeRecord {
    pub fn new(timestamp: i64, symbol: impl Into<String>, quantity: i64, price: i64) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            quantity,
            price,
        }
    }
}

/// Per-symbol statistics produced at finalize time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub symbol: String,
    /// Largest gap between consecutive timestamps (0 for a single trade)
    pub max_time_gap: i64,
    /// Sum of all quantities
    pub total_volume: i128,
    /// Truncated `sum(quantity * price) / total_volume`, or 0 without positive volume
    pub weighted_avg_price: i128,
    /// Highest price seen, floored at 0
    pub max_price: i64,
}

impl SummaryRow {
    /// Report fields in output column order
    pub fn to_fields(&self) -> [String; 5] {
        [
            self.symbol.clone(),
            self.max_time_gap.to_string(),
            self.total_volume.to_string(),
            self.weighted_avg_price.to_string(),
            self.max_price.to_string(),
        ]
    }
}

/// Sharded ingestion errors
#[derive(Debug, Error)]
pub enum ShardError {
    /// Worker stopped receiving before the stream ended
    #[error("Shard {shard} channel closed")]
    ChannelClosed { shard: usize },
    /// Worker task panicked or was cancelled
    #[error("Shard worker failed: {0}")]
    Join(#[from] JoinError),
}
