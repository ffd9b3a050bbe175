//! Running statistics for a single symbol

use super::types::{SummaryRow, TradeRecord};

/// Exact running statistics for one symbol
///
/// Volume and notional are held in `i128` so that any realistic number of
/// 64-bit `quantity * price` products can be summed without wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolAccumulator {
    /// Timestamp of the first record, used when merging shards
    pub first_timestamp: Option<i64>,
    /// Timestamp of the most recent record
    pub last_timestamp: Option<i64>,
    /// Largest consecutive gap seen; negative gaps never lower it below 0
    pub max_time_gap: i64,
    /// Sum of quantities
    pub total_volume: i128,
    /// Sum of quantity * price
    pub sum_notional: i128,
    /// Highest price seen, starting from 0
    pub max_price: i64,
    /// Number of records folded in
    pub trade_count: u64,
}

impl SymbolAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the running statistics
    pub fn update(&mut self, record: &TradeRecord) {
        if let Some(last) = self.last_timestamp {
            let gap = record.timestamp.saturating_sub(last);
            self.max_time_gap = self.max_time_gap.max(gap);
        }
        if self.first_timestamp.is_none() {
            self.first_timestamp = Some(record.timestamp);
        }
        self.last_timestamp = Some(record.timestamp);

        let quantity = i128::from(record.quantity);
        self.total_volume += quantity;
        self.sum_notional += quantity * i128::from(record.price);
        self.max_price = self.max_price.max(record.price);
        self.trade_count += 1;
    }

    /// Append statistics of records that followed this accumulator's records
    ///
    /// The gap across the boundary (`later.first - self.last`) is included, so
    /// merging consecutive slices of a symbol's stream is exact. Merging slices
    /// out of order yields a different max gap than sequential ingestion.
    pub fn merge(&mut self, later: &SymbolAccumulator) {
        if let (Some(last), Some(first)) = (self.last_timestamp, later.first_timestamp) {
            let gap = first.saturating_sub(last);
            self.max_time_gap = self.max_time_gap.max(gap);
        }
        self.max_time_gap = self.max_time_gap.max(later.max_time_gap);

        if self.first_timestamp.is_none() {
            self.first_timestamp = later.first_timestamp;
        }
        if later.last_timestamp.is_some() {
            self.last_timestamp = later.last_timestamp;
        }

        self.total_volume += later.total_volume;
        self.sum_notional += later.sum_notional;
        self.max_price = self.max_price.max(later.max_price);
        self.trade_count += later.trade_count;
    }

    /// Volume-weighted average price, truncated toward zero
    ///
    /// Returns 0 unless total volume is strictly positive.
    pub fn weighted_avg_price(&self) -> i128 {
        if self.total_volume > 0 {
            self.sum_notional / self.total_volume
        } else {
            0
        }
    }

    /// Snapshot this accumulator as a report row
    pub fn summarize(&self, symbol: &str) -> SummaryRow {
        SummaryRow {
            symbol: symbol.to_string(),
            max_time_gap: self.max_time_gap,
            total_volume: self.total_volume,
            weighted_avg_price: self.weighted_avg_price(),
            max_price: self.max_price,
        }
    }
}
