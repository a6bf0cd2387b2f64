use std::{fmt, io};
use thiserror::Error;

/// Unified error type for all csvframe operations.
///
/// Every crate in the workspace returns this enum so failures cross crate
/// boundaries with `?` and callers can match on the category they care about.
/// Nothing is retried locally: an error aborts the operation that raised it,
/// and any output file already partially written is left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while opening, reading, or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV codec error.
    ///
    /// Raised by the underlying reader or writer, e.g. when a source row is
    /// not valid UTF-8 or the destination rejects a write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Arrow error while converting a frame into a `RecordBatch` or rendering it.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Caller-supplied configuration is unusable.
    ///
    /// Covers a missing or empty output path, column name and type lists of
    /// different lengths, duplicate column names, and malformed manifests.
    ///
    /// # Recovery
    ///
    /// Fix the input and retry the operation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A column name was requested that the frame does not contain.
    #[error("column '{0}' not found")]
    KeyNotFound(String),

    /// A text field could not be cast to the column's declared numeric type.
    ///
    /// `row` is the zero-based position of the value inside its column, which
    /// matches the data row number whenever the source rows are well formed.
    #[error("cannot cast {value:?} in column '{column}' (row {row}) to {target}")]
    TypeCast {
        column: String,
        row: usize,
        value: String,
        target: &'static str,
    },

    /// A character has no representation in the requested output encoding.
    #[error("character {ch:?} cannot be encoded as {encoding}")]
    Encoding { ch: char, encoding: &'static str },
}

impl Error {
    /// Create an [`Error::InvalidConfiguration`] from any displayable message.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvframe_result::Error;
    ///
    /// let err = Error::invalid_configuration("output path must not be empty");
    /// assert!(matches!(err, Error::InvalidConfiguration(msg) if msg.contains("empty")));
    /// ```
    #[inline]
    pub fn invalid_configuration<M: fmt::Display>(msg: M) -> Self {
        Error::InvalidConfiguration(msg.to_string())
    }

    /// Create an [`Error::KeyNotFound`] for the given column name.
    #[inline]
    pub fn key_not_found(name: impl Into<String>) -> Self {
        Error::KeyNotFound(name.into())
    }
}
