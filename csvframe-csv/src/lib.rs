//! CSV ingestion and export for [`ColumnStore`].
//!
//! - [`csv_ingest`] reads a comma-delimited, double-quote-quoted source into a
//!   store whose column names and types come from an [`IngestSchema`], not
//!   from the source's header row.
//! - [`csv_export`] writes a store back out, header first, Latin-1 by default.
//!
//! [`ColumnStoreCsvExt`] hangs both directions off [`ColumnStore`] itself.

use std::path::Path;

use csv::ReaderBuilder;
use csvframe_column_map::ColumnStore;
use csvframe_result::Result;

pub mod csv_export;
pub mod csv_ingest;
pub mod encoding;
pub mod normalize;
pub mod schema;

pub use csv_export::{CsvWriteOptions, export_csv, export_csv_to_writer};
pub use csv_ingest::{read_csv, read_csv_from_reader};
pub use encoding::TextEncoding;
pub use normalize::normalize_field;
pub use schema::IngestSchema;

#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Discard the first row of the source, whatever it contains.
    pub has_header: bool,
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvReadOptions {
    pub(crate) fn to_reader_builder(&self) -> ReaderBuilder {
        // The header row is skipped by hand so the csv reader never treats it
        // specially, and rows may vary in width.
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote);
        builder
    }
}

/// CSV entry points on [`ColumnStore`] with default options.
pub trait ColumnStoreCsvExt: Sized {
    /// Ingest the CSV file at `path`, naming and typing its fields positionally.
    ///
    /// `dtypes` identifiers are resolved with
    /// [`ColumnType::from_identifier`](csvframe_column_map::ColumnType::from_identifier).
    fn from_csv<P, N, D>(path: P, column_names: &[N], dtypes: &[D]) -> Result<Self>
    where
        P: AsRef<Path>,
        N: AsRef<str>,
        D: AsRef<str>;

    /// Export to `destination` as Latin-1 CSV, returning the data row count.
    fn export<P: AsRef<Path>>(&self, destination: P) -> Result<usize>;
}

impl ColumnStoreCsvExt for ColumnStore {
    fn from_csv<P, N, D>(path: P, column_names: &[N], dtypes: &[D]) -> Result<Self>
    where
        P: AsRef<Path>,
        N: AsRef<str>,
        D: AsRef<str>,
    {
        let schema = IngestSchema::from_identifiers(column_names, dtypes)?;
        read_csv(path, &schema, &CsvReadOptions::default())
    }

    fn export<P: AsRef<Path>>(&self, destination: P) -> Result<usize> {
        export_csv(self, destination, &CsvWriteOptions::default())
    }
}
