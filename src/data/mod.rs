//! Data module
//!
//! Reads trade lines and writes the per-symbol summary report

mod parser;
mod report;
mod types;

pub use parser::{parse_fields, parse_line, TradeReader};
pub use report::ReportWriter;
pub use types::{DataError, ParseError};
