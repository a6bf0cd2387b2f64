//! Load a delimited text source into a [`ColumnStore`].
//!
//! Ingestion runs in two passes. The first reads every data row, normalises
//! each field (see [`normalize_field`]), and appends it to the text
//! accumulator of its column position. The second casts whole columns to
//! their declared numeric type. The first line of the source is discarded as a
//! header when [`CsvReadOptions::has_header`] is set, whatever it contains,
//! even when it is blank.
//!
//! Rows are not required to have exactly one field per column. Extra fields
//! are dropped; a row with too few fields leaves the trailing columns short,
//! producing a ragged store. Both cases are logged and counted, not rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use csvframe_column_map::{ColumnData, ColumnStore, ColumnType};
use csvframe_result::{Error, Result};

use crate::normalize::normalize_field;
use crate::{CsvReadOptions, IngestSchema};

/// Malformed-row counters gathered while reading.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct RowShape {
    rows: usize,
    long_rows: usize,
    short_rows: usize,
}

fn cast_column(name: &str, column_type: ColumnType, values: Vec<String>) -> Result<ColumnData> {
    fn cast_err(name: &str, row: usize, value: &str, target: ColumnType) -> Error {
        Error::TypeCast {
            column: name.to_string(),
            row,
            value: value.to_string(),
            target: target.identifier(),
        }
    }

    match column_type {
        ColumnType::Utf8 => Ok(ColumnData::Utf8(values)),
        ColumnType::Int64 => values
            .iter()
            .enumerate()
            .map(|(row, v)| {
                v.trim()
                    .parse::<i64>()
                    .map_err(|_| cast_err(name, row, v, column_type))
            })
            .collect::<Result<Vec<_>>>()
            .map(ColumnData::Int64),
        ColumnType::Float64 => values
            .iter()
            .enumerate()
            .map(|(row, v)| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|_| cast_err(name, row, v, column_type))
            })
            .collect::<Result<Vec<_>>>()
            .map(ColumnData::Float64),
    }
}

/// Consume a line terminator at the start of `reader`, reporting whether
/// there was one.
fn consume_blank_line<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let len = match reader.fill_buf()? {
        [b'\r', b'\n', ..] => 2,
        [b'\n' | b'\r', ..] => 1,
        _ => 0,
    };
    reader.consume(len);
    Ok(len > 0)
}

/// Read CSV data from `reader` into a new store laid out by `schema`.
pub fn read_csv_from_reader<R: Read>(
    reader: R,
    schema: &IngestSchema,
    options: &CsvReadOptions,
) -> Result<ColumnStore> {
    let mut reader = BufReader::new(reader);
    // The csv reader drops blank lines, so a blank header line is consumed
    // here and no record is skipped for it.
    let mut skip_header = options.has_header;
    if skip_header && consume_blank_line(&mut reader)? {
        tracing::trace!("[CSV_INGEST] header row is blank");
        skip_header = false;
    }

    let mut csv_reader = options.to_reader_builder().from_reader(reader);
    let width = schema.len();
    let mut values: Vec<Vec<String>> = vec![Vec::new(); width];
    let mut shape = RowShape::default();

    let mut records = csv_reader.records();
    if skip_header {
        if let Some(header) = records.next() {
            let header = header?;
            tracing::trace!("[CSV_INGEST] skipping header row with {} fields", header.len());
        }
    }

    for record in records {
        let record = record?;
        shape.rows += 1;
        if record.len() > width {
            shape.long_rows += 1;
        } else if record.len() < width {
            shape.short_rows += 1;
        }

        for (column, field) in values.iter_mut().zip(record.iter()) {
            column.push(normalize_field(field).into_owned());
        }
    }

    if shape.long_rows > 0 {
        tracing::warn!(
            "[CSV_INGEST] {} of {} rows had more than {} fields; extra fields were dropped",
            shape.long_rows,
            shape.rows,
            width
        );
    }
    if shape.short_rows > 0 {
        tracing::warn!(
            "[CSV_INGEST] {} of {} rows had fewer than {} fields; trailing columns are short",
            shape.short_rows,
            shape.rows,
            width
        );
    }

    let columns = schema
        .iter()
        .zip(values)
        .map(|((name, column_type), raw)| {
            cast_column(name, column_type, raw).map(|data| (name.to_string(), data))
        })
        .collect::<Result<Vec<_>>>()?;

    let store = ColumnStore::from_columns(columns)?;
    tracing::debug!(
        "[CSV_INGEST] loaded {} rows into {} columns",
        store.row_count(),
        store.column_count()
    );
    Ok(store)
}

/// Read the CSV file at `csv_path` into a new store laid out by `schema`.
pub fn read_csv<C: AsRef<Path>>(
    csv_path: C,
    schema: &IngestSchema,
    options: &CsvReadOptions,
) -> Result<ColumnStore> {
    let csv_path = csv_path.as_ref();
    tracing::debug!("[CSV_INGEST] reading {}", csv_path.display());
    let file = File::open(csv_path)?;
    read_csv_from_reader(file, schema, options)
}
