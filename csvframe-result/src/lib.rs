//! Error types and result definitions for csvframe.
//!
//! All crates in the workspace share one error enum ([`Error`]) and the
//! [`Result<T>`] alias, so failures propagate across crate boundaries with `?`.
//!
//! # Error Categories
//!
//! - **Configuration errors** ([`Error::InvalidConfiguration`]): empty output
//!   path, mismatched column name/type lists, malformed manifests
//! - **Lookup failures** ([`Error::KeyNotFound`]): unknown column name
//! - **Cast failures** ([`Error::TypeCast`]): non-numeric text in a numeric column
//! - **Encoding failures** ([`Error::Encoding`]): text outside the output charset
//! - **I/O and codec errors** ([`Error::Io`], [`Error::Csv`], [`Error::Arrow`])

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
