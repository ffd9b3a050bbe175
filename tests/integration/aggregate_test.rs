//! Integration tests for the aggregation engine public API

use trade_stats::aggregate::{Aggregator, ShardedAggregator, TradeRecord};
use trade_stats::data::{parse_line, TradeReader};

#[test]
fn test_volume_conservation_beyond_i64() {
    let mut aggregator = Aggregator::new();
    let n: i64 = 100_000;
    for i in 0..n {
        aggregator.ingest(&TradeRecord::new(i, "BIG", i64::MAX, 2));
    }

    let rows = aggregator.finalize();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_volume, i128::from(i64::MAX) * i128::from(n));
    assert_eq!(rows[0].weighted_avg_price, 2);
    assert_eq!(rows[0].max_time_gap, 1);
    assert!(rows[0].total_volume > i128::from(i64::MAX));
}

#[test]
fn test_single_trade_symbols() {
    let aggregator: Aggregator = ["C", "A", "B"]
        .iter()
        .map(|s| TradeRecord::new(42, *s, 7, 9))
        .collect();

    for row in aggregator.finalize() {
        assert_eq!(row.max_time_gap, 0);
        assert_eq!(row.total_volume, 7);
        assert_eq!(row.weighted_avg_price, 9);
        assert_eq!(row.max_price, 9);
    }
}

#[test]
fn test_parsed_lines_feed_engine() {
    let lines = [
        "1000,AAPL,10,100",
        "1005,AAPL,5,110",
        "oops",
        "1000,MSFT,20,50",
    ];
    let aggregator: Aggregator = lines.iter().filter_map(|l| parse_line(l).ok()).collect();

    let rendered: Vec<String> = aggregator
        .finalize()
        .iter()
        .map(|r| r.to_fields().join(","))
        .collect();
    assert_eq!(rendered, vec!["AAPL,5,15,103,110", "MSFT,0,20,50,50"]);
}

#[test]
fn test_reader_iterator_into_engine() {
    let input = "3,X,1,10\n1,X,1,20\n2,Y,1,5\n";
    let records: Result<Vec<_>, _> = TradeReader::new(input.as_bytes()).collect();
    let aggregator: Aggregator = records.unwrap().into_iter().collect();

    // Out-of-order timestamps produce a negative gap, which never beats 0
    let x = aggregator.get("X").unwrap();
    assert_eq!(x.max_time_gap, 0);
    assert_eq!(x.last_timestamp, Some(1));
    assert_eq!(x.max_price, 20);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sharded_on_multi_thread_runtime() {
    let records: Vec<TradeRecord> = (0..10_000i64)
        .map(|i| {
            TradeRecord::new(
                i * 2 + i % 3,
                format!("S{}", i % 50),
                i % 11 - 3,
                1_000 + i % 97,
            )
        })
        .collect();
    let sequential: Aggregator = records.iter().cloned().collect();

    let sharded = ShardedAggregator::new(6, 64);
    for record in records {
        sharded.ingest(record).await.unwrap();
    }
    let merged = sharded.finish().await.unwrap();

    assert_eq!(merged.len(), 50);
    assert_eq!(merged.finalize(), sequential.finalize());
}
