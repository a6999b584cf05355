//! # Delimited Text Export
//!
//! Comma-separated rows with one header row, written and read with the
//! `csv` crate. The header is quoted only where needed; every data cell is
//! quoted, so free text keeps its commas, quotes and line breaks.

use super::errors::StorageError;
use csv::{QuoteStyle, ReaderBuilder, Terminator, Writer, WriterBuilder};
use std::io;

fn writer(style: QuoteStyle, out: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(style)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(out)
}

fn into_bytes(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, StorageError> {
    writer.into_inner().map_err(|e| {
        let error = e.error();
        StorageError::Io(io::Error::new(error.kind(), error.to_string()))
    })
}

/// Incremental writer for delimited text.
pub struct DelimitedWriter {
    inner: Writer<Vec<u8>>,
    rows: usize,
}

impl DelimitedWriter {
    /// Start a document with the given header row.
    pub fn with_header(header: &[&str]) -> Result<Self, StorageError> {
        let mut head = writer(QuoteStyle::Necessary, Vec::new());
        head.write_record(header)?;
        Ok(Self {
            inner: writer(QuoteStyle::Always, into_bytes(head)?),
            rows: 1,
        })
    }

    pub fn row<I, T>(&mut self, cells: I) -> Result<(), StorageError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.inner.write_record(cells)?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, header included.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn finish(self) -> Result<String, StorageError> {
        String::from_utf8(into_bytes(self.inner)?).map_err(|e| StorageError::Corrupted {
            key: "export".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Parse delimited text back into rows of cells, header included.
pub fn parse_delimited(text: &str) -> Result<Vec<Vec<String>>, StorageError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
