//! Symbol-partitioned parallel ingestion
//!
//! Each symbol is routed to exactly one shard, so a symbol's records keep
//! their relative order and no state is shared between workers.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::engine::Aggregator;
use super::types::{ShardError, TradeRecord};

/// Fans records out to per-shard aggregators running on tokio tasks
pub struct ShardedAggregator {
    senders: Vec<mpsc::Sender<TradeRecord>>,
    workers: Vec<JoinHandle<Aggregator>>,
}

impl ShardedAggregator {
    /// Spawn `shards` workers, each with a bounded channel of `capacity`
    ///
    /// Both arguments are clamped to at least 1. Must be called from within a
    /// tokio runtime.
    pub fn new(shards: usize, capacity: usize) -> Self {
        let shards = shards.max(1);
        let capacity = capacity.max(1);

        let mut senders = Vec::with_capacity(shards);
        let mut workers = Vec::with_capacity(shards);

        for shard in 0..shards {
            let (tx, rx) = mpsc::channel(capacity);
            senders.push(tx);
            workers.push(tokio::spawn(Self::run_worker(shard, rx)));
        }

        Self { senders, workers }
    }

    /// Number of shards
    pub fn shards(&self) -> usize {
        self.senders.len()
    }

    /// Shard index for a symbol; stable for the lifetime of the process
    pub fn shard_for(&self, symbol: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        symbol.hash(&mut hasher);
        (hasher.finish() % self.senders.len() as u64) as usize
    }

    /// Route a record to its symbol's shard, waiting if the channel is full
    pub async fn ingest(&self, record: TradeRecord) -> Result<(), ShardError> {
        let shard = self.shard_for(&record.symbol);
        self.senders[shard]
            .send(record)
            .await
            .map_err(|_| ShardError::ChannelClosed { shard })
    }

    /// Close all channels, wait for workers and merge their results
    pub async fn finish(self) -> Result<Aggregator, ShardError> {
        drop(self.senders);

        let mut merged = Aggregator::new();
        for worker in self.workers {
            // Shards hold disjoint symbols, so merge order does not matter
            merged.merge(worker.await?);
        }
        Ok(merged)
    }

    async fn run_worker(shard: usize, mut rx: mpsc::Receiver<TradeRecord>) -> Aggregator {
        let mut aggregator = Aggregator::new();
        while let Some(record) = rx.recv().await {
            aggregator.ingest(&record);
        }
        tracing::debug!(
            shard,
            symbols = aggregator.len(),
            records = aggregator.records_ingested(),
            "Shard worker finished"
        );
        aggregator
    }
}
