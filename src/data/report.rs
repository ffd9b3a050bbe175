//! Summary report output
//!
//! One line per symbol: `symbol,max_time_gap,total_volume,weighted_avg_price,max_price`,
//! each terminated by `\n`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::types::DataError;
use crate::aggregate::SummaryRow;

/// Writes summary rows as delimited text
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: u64,
}

impl ReportWriter<File> {
    /// Create (or truncate) a report file
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        // Symbols are written verbatim, matching how they were read
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);

        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_row(&mut self, row: &SummaryRow) -> Result<(), DataError> {
        self.writer.write_record(row.to_fields())?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_all<'a>(
        &mut self,
        rows: impl IntoIterator<Item = &'a SummaryRow>,
    ) -> Result<(), DataError> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush buffered output and return the underlying sink
    pub fn finish(mut self) -> Result<W, DataError> {
        self.writer.flush()?;
        self.writer
            .into_inner()
            .map_err(|e| DataError::Io(e.into_error()))
    }
}
