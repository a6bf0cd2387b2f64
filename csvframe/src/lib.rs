//! csvframe: column-oriented CSV frames.
//!
//! This crate is the entrypoint for the csvframe workspace. It re-exports the
//! column store and its CSV and merge operations, and adds the manifest-driven
//! [`pipeline`] used by the `csvframe` binary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use csvframe::prelude::*;
//!
//! let customers = ColumnStore::from_csv(
//!     "input/CUSTOMER.csv",
//!     &["CUSTOMER_CODE", "FIRSTNAME", "LASTNAME"],
//!     &["CHAR", "CHAR", "CHAR"],
//! )?;
//! let sample = ColumnStore::from_csv("input/SAMPLE.csv", &["CUSTOMER_CODE"], &["CHAR"])?;
//!
//! let merged = customers.merge(&sample, "CUSTOMER_CODE")?;
//! merged.export("customer_merged.csv")?;
//! # Ok::<(), csvframe::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Data model** (`csvframe-column-map`): [`ColumnStore`], an ordered map of
//!   typed columns.
//! - **CSV** (`csvframe-csv`): ingestion with positional naming, type casts and
//!   ASCII normalisation; export with empty-field fill and Latin-1 output.
//! - **Merge** (`csvframe-join`): key-membership filter (left semi join).
//! - **Errors** (`csvframe-result`): one [`Error`] enum for every crate.

pub mod manifest;
pub mod pipeline;

pub use csvframe_column_map::{ColumnData, ColumnStore, ColumnType, ValueRef};
pub use csvframe_csv::{
    ColumnStoreCsvExt, CsvReadOptions, CsvWriteOptions, IngestSchema, TextEncoding, export_csv,
    export_csv_to_writer, read_csv, read_csv_from_reader,
};
pub use csvframe_join::{ColumnStoreMergeExt, semi_join_filter};
pub use csvframe_result::{Error, Result};

pub use manifest::{KeySelector, Manifest, MergeStep, TableSpec};
pub use pipeline::{Pipeline, StepSummary};

pub mod prelude {
    //! Everything needed to ingest, merge and export with method syntax.

    pub use csvframe_column_map::{ColumnData, ColumnStore};
    pub use csvframe_csv::ColumnStoreCsvExt;
    pub use csvframe_join::ColumnStoreMergeExt;
}
