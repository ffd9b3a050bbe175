//! Data layer error types

use thiserror::Error;

/// Why a single input line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Line did not split into exactly four fields
    #[error("Expected 4 fields, found {0}")]
    FieldCount(usize),
    /// Symbol field was empty
    #[error("Empty symbol")]
    EmptySymbol,
    /// A numeric field was not a valid 64-bit integer
    #[error("Invalid {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
    /// Line was not valid UTF-8
    #[error("Invalid UTF-8")]
    InvalidUtf8,
}

/// Fatal reader/writer failures
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
