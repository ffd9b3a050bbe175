//! Integration tests for the file-to-file pipeline

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use trade_stats::config::{Config, IngestConfig};
use trade_stats::pipeline;

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    fs::write(&path, content).unwrap();
    path
}

async fn run_with(input: &Path, output: &Path, shards: usize) -> pipeline::RunSummary {
    let config = IngestConfig {
        shards,
        channel_capacity: 4,
    };
    pipeline::run(input, output, &config).await.unwrap()
}

#[tokio::test]
async fn test_reference_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1000,AAPL,10,100\n1005,AAPL,5,110\n1000,MSFT,20,50\n");
    let output = dir.path().join("output.csv");

    let summary = run_with(&input, &output, 1).await;

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "AAPL,5,15,103,110\nMSFT,0,20,50,50\n"
    );
    assert_eq!(summary.records, 3);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.symbols, 2);
    assert_eq!(summary.rows_written, 2);
}

#[tokio::test]
async fn test_malformed_lines_skipped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "1000,AAPL,10,100\n\
         1002,AAPL,3\n\
         1003,GHOST,1,1,1\n\
         1004,AAPL,x,100\n\
         1005,AAPL,5,110\n",
    );
    let output = dir.path().join("output.csv");

    let summary = run_with(&input, &output, 1).await;

    assert_eq!(fs::read_to_string(&output).unwrap(), "AAPL,5,15,103,110\n");
    assert_eq!(summary.records, 2);
    assert_eq!(summary.skipped, 3);
    assert_eq!(summary.lines_read, 5);
}

#[tokio::test]
async fn test_trailing_comma_lines_ingested() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1000,AAPL,10,100,\n1005,AAPL,5,110\n1000,MSFT,20,50,\r\n");
    let output = dir.path().join("output.csv");

    let summary = run_with(&input, &output, 1).await;

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "AAPL,5,15,103,110\nMSFT,0,20,50,50\n"
    );
    assert_eq!(summary.records, 3);
    assert_eq!(summary.skipped, 0);
}

#[tokio::test]
async fn test_sharded_report_identical() {
    let dir = TempDir::new().unwrap();
    let mut content = String::new();
    for i in 0..2_000i64 {
        let symbol = ["AAPL", "MSFT", "GOOG", "IBM", "TSLA"][(i % 5) as usize];
        content.push_str(&format!(
            "{},{},{},{}\n",
            i * 3 + i % 7,
            symbol,
            i % 13 + 1,
            100 + i % 37
        ));
    }
    let input = write_input(&dir, &content);

    let sequential = dir.path().join("sequential.csv");
    let sharded = dir.path().join("sharded.csv");
    run_with(&input, &sequential, 1).await;
    run_with(&input, &sharded, 4).await;

    let expected = fs::read_to_string(&sequential).unwrap();
    assert_eq!(expected.lines().count(), 5);
    assert_eq!(fs::read_to_string(&sharded).unwrap(), expected);
}

#[tokio::test]
async fn test_repeated_runs_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "5,Z,1,9\n1,A,2,3\n7,Z,4,1\n3,M,-1,2\n");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    run_with(&input, &first, 1).await;
    run_with(&input, &second, 1).await;

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        "A,0,2,3,3\nM,0,-1,0,2\nZ,2,5,2,9\n"
    );
}

#[tokio::test]
async fn test_empty_input_creates_empty_report() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "");
    let output = dir.path().join("output.csv");

    let summary = run_with(&input, &output, 1).await;

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
    assert_eq!(summary.symbols, 0);
}

#[tokio::test]
async fn test_missing_input_is_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.csv");

    let result = pipeline::run(
        &dir.path().join("missing.csv"),
        &output,
        &IngestConfig::default(),
    )
    .await;

    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "1,A,1,1\n");
    let output = dir.path().join("no_such_dir").join("output.csv");

    let result = pipeline::run(&input, &output, &IngestConfig::default()).await;
    assert!(result.is_err());
}

#[test]
fn test_config_example_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml.example");
    let config = Config::load(path).unwrap();
    assert_eq!(config.ingest.shards, 1);
}
