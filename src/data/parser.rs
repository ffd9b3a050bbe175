//! Trade line parsing
//!
//! Input is one trade per line: `timestamp,symbol,quantity,price`. Fields are
//! split on `,` with no quoting. Malformed lines are skipped and counted,
//! never surfaced as errors.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use super::types::{DataError, ParseError};
use crate::aggregate::TradeRecord;

const FIELD_COUNT: usize = 4;

/// Parse a single line into a trade record
pub fn parse_line(line: &str) -> Result<TradeRecord, ParseError> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
    parse_fields(&fields)
}

/// Parse pre-split fields into a trade record
///
/// A single trailing empty field (a line ending in `,`) is not counted.
pub fn parse_fields(fields: &[&str]) -> Result<TradeRecord, ParseError> {
    let fields = match fields.split_last() {
        Some((last, rest)) if last.is_empty() => rest,
        _ => fields,
    };
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount(fields.len()));
    }

    let symbol = fields[1];
    if symbol.is_empty() {
        return Err(ParseError::EmptySymbol);
    }

    Ok(TradeRecord {
        timestamp: parse_int("timestamp", fields[0])?,
        symbol: symbol.to_string(),
        quantity: parse_int("quantity", fields[2])?,
        price: parse_int("price", fields[3])?,
    })
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

fn parse_byte_record(record: &ByteRecord) -> Result<TradeRecord, ParseError> {
    let mut fields = Vec::with_capacity(FIELD_COUNT);
    for field in record.iter() {
        fields.push(std::str::from_utf8(field).map_err(|_| ParseError::InvalidUtf8)?);
    }
    parse_fields(&fields)
}

/// Streaming reader over trade lines
///
/// Yields well-formed records only; rejected lines bump [`skipped`] and are
/// logged at debug level.
///
/// [`skipped`]: TradeReader::skipped
pub struct TradeReader<R> {
    reader: csv::Reader<R>,
    record: ByteRecord,
    lines_read: u64,
    skipped: u64,
}

impl TradeReader<File> {
    /// Open a trade file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> TradeReader<R> {
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(source);

        Self {
            reader,
            record: ByteRecord::new(),
            lines_read: 0,
            skipped: 0,
        }
    }

    /// Next well-formed record, or `None` at end of input
    ///
    /// Only I/O failures are returned as errors.
    pub fn next_record(&mut self) -> Result<Option<TradeRecord>, DataError> {
        while self.reader.read_byte_record(&mut self.record)? {
            self.lines_read += 1;
            match parse_byte_record(&self.record) {
                Ok(trade) => return Ok(Some(trade)),
                Err(reason) => {
                    self.skipped += 1;
                    let line = self.record.position().map(|p| p.line());
                    tracing::debug!(?line, %reason, "Skipping malformed line");
                }
            }
        }
        Ok(None)
    }

    /// Non-empty lines consumed so far
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Lines rejected as malformed so far
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl<R: Read> Iterator for TradeReader<R> {
    type Item = Result<TradeRecord, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
