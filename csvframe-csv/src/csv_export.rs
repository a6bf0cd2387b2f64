//! Write a [`ColumnStore`] out as delimited text.
//!
//! The header row lists the column names in store order. Data rows run up to
//! the longest column; a column with no value at some row contributes an
//! empty field there. Values are rendered with their `Display` form and
//! encoded with [`CsvWriteOptions::encoding`] before they reach the CSV
//! writer, which quotes fields only when they contain the delimiter, the
//! quote character, or a line break.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use csvframe_column_map::ColumnStore;
use csvframe_result::{Error, Result};

use crate::encoding::TextEncoding;

/// Configuration for writing CSV files.
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Write a header row with column names when true.
    pub include_header: bool,
    /// Delimiter to use between fields.
    pub delimiter: u8,
    /// Byte encoding of every written field.
    pub encoding: TextEncoding,
    /// Record terminator; CRLF by default.
    pub terminator: Terminator,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            delimiter: b',',
            encoding: TextEncoding::Latin1,
            terminator: Terminator::CRLF,
        }
    }
}

impl CsvWriteOptions {
    fn to_writer_builder(&self) -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .has_headers(false)
            .delimiter(self.delimiter)
            .quote(b'"')
            .quote_style(QuoteStyle::Necessary)
            .terminator(self.terminator);
        builder
    }
}

fn terminator_bytes(terminator: Terminator) -> Vec<u8> {
    match terminator {
        Terminator::Any(byte) => vec![byte],
        _ => b"\r\n".to_vec(),
    }
}

/// Write `store` to `writer`, returning the number of data rows written.
pub fn export_csv_to_writer<W: Write>(
    store: &ColumnStore,
    mut writer: W,
    options: &CsvWriteOptions,
) -> Result<usize> {
    let encoding = options.encoding;
    if options.include_header && store.is_empty() {
        // A header with no columns is a bare line terminator.
        writer.write_all(&terminator_bytes(options.terminator))?;
    }
    let mut csv_writer = options.to_writer_builder().from_writer(writer);

    if options.include_header {
        if !store.is_empty() {
            let header = store
                .column_names()
                .iter()
                .map(|name| encoding.encode(name))
                .collect::<Result<Vec<_>>>()?;
            csv_writer.write_record(&header)?;
        }
    }

    let rows = store.row_count();
    let mut fields: Vec<Vec<u8>> = Vec::with_capacity(store.column_count());
    for row in 0..rows {
        fields.clear();
        for (_, column) in store.columns() {
            let text = column.value(row).map(|v| v.to_string()).unwrap_or_default();
            fields.push(encoding.encode(&text)?.into_owned());
        }
        csv_writer.write_record(&fields)?;
    }

    csv_writer.flush()?;
    tracing::debug!(
        "[CSV_EXPORT] wrote {} rows x {} columns as {}",
        rows,
        store.column_count(),
        encoding.name()
    );
    Ok(rows)
}

/// Write `store` to the file at `csv_path`, creating or truncating it.
///
/// An empty path fails with [`Error::InvalidConfiguration`] before anything
/// is created. If a later step fails, the partially written file is left on
/// disk.
pub fn export_csv<C: AsRef<Path>>(
    store: &ColumnStore,
    csv_path: C,
    options: &CsvWriteOptions,
) -> Result<usize> {
    let csv_path = csv_path.as_ref();
    if csv_path.as_os_str().is_empty() {
        return Err(Error::invalid_configuration("output path must not be empty"));
    }

    tracing::trace!("[CSV_EXPORT] export_csv called for {}", csv_path.display());
    let file = File::create(csv_path)?;
    export_csv_to_writer(store, file, options)
}
