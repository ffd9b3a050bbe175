//! Symbol-keyed aggregation engine

use std::collections::BTreeMap;

use super::accumulator::SymbolAccumulator;
use super::types::{SummaryRow, TradeRecord};

/// Single-pass aggregator keyed by symbol
///
/// Accumulators live in a `BTreeMap`, so iteration and [`finalize`] output
/// are always in ascending byte order of the symbol.
///
/// [`finalize`]: Aggregator::finalize
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    symbols: BTreeMap<String, SymbolAccumulator>,
    records: u64,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into its symbol's accumulator
    pub fn ingest(&mut self, record: &TradeRecord) {
        // Avoid allocating a key for symbols already present
        match self.symbols.get_mut(record.symbol.as_str()) {
            Some(acc) => acc.update(record),
            None => self
                .symbols
                .entry(record.symbol.clone())
                .or_default()
                .update(record),
        }
        self.records += 1;
    }

    /// Snapshot all symbols as report rows in ascending symbol order
    ///
    /// Does not consume or reset state; further `ingest` calls resume
    /// accumulation.
    pub fn finalize(&self) -> Vec<SummaryRow> {
        self.symbols
            .iter()
            .map(|(symbol, acc)| acc.summarize(symbol))
            .collect()
    }

    /// Append another aggregator whose records followed this one's
    ///
    /// Symbols present in both are combined with [`SymbolAccumulator::merge`].
    pub fn merge(&mut self, later: Aggregator) {
        for (symbol, acc) in later.symbols {
            match self.symbols.get_mut(&symbol) {
                Some(existing) => existing.merge(&acc),
                None => {
                    self.symbols.insert(symbol, acc);
                }
            }
        }
        self.records += later.records;
    }

    /// Accumulator for a symbol, if it has been seen
    pub fn get(&self, symbol: &str) -> Option<&SymbolAccumulator> {
        self.symbols.get(symbol)
    }

    /// Iterate accumulators in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolAccumulator)> {
        self.symbols.iter().map(|(s, acc)| (s.as_str(), acc))
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Total records ingested across all symbols
    pub fn records_ingested(&self) -> u64 {
        self.records
    }
}

impl Extend<TradeRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = TradeRecord>>(&mut self, iter: I) {
        for record in iter {
            self.ingest(&record);
        }
    }
}

impl FromIterator<TradeRecord> for Aggregator {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        let mut aggregator = Self::new();
        aggregator.extend(iter);
        aggregator
    }
}
