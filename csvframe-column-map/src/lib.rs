//! Ordered, typed column storage.
//!
//! A [`ColumnStore`] maps column names, in a fixed order, to one typed vector
//! per column ([`ColumnData`]). It is the data model shared by the CSV
//! ingest/export crate and the merge crate.
//!
//! ```
//! use csvframe_column_map::{ColumnData, ColumnStore};
//!
//! let store = ColumnStore::from_columns([
//!     ("ID", ColumnData::from(vec![1i64, 2, 3])),
//!     ("NAME", ColumnData::from(vec!["a", "b", "c"])),
//! ])
//! .unwrap();
//!
//! assert_eq!(store.column_names(), ["ID", "NAME"]);
//! assert_eq!(store.row_count(), 3);
//! ```

pub mod batch;
pub mod column;
pub mod store;
pub mod types;

pub use column::ColumnData;
pub use csvframe_result::{Error, Result};
pub use store::ColumnStore;
pub use types::{ColumnType, ValueRef, format_float};
