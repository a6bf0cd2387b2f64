//! The column store: an ordered mapping from column name to typed values.
//!
//! Column order is significant. It is fixed at construction and carried into
//! every derived store (merge output, gathers, clones) and into export order.
//! No operation mutates a store in place; transformations always build a new
//! [`ColumnStore`]. Construction takes ownership of the column vectors and
//! `Clone` copies them, so a store never shares backing storage with its
//! source.

use csvframe_result::{Error, Result};
use rustc_hash::FxHashMap;

use crate::column::ColumnData;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStore {
    names: Vec<String>,
    columns: Vec<ColumnData>,
    index: FxHashMap<String, usize>,
}

impl ColumnStore {
    /// A store with zero columns and zero rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(name, values)` pairs, keeping their order.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if a name repeats.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ColumnData)>,
        S: Into<String>,
    {
        let mut store = Self::new();
        for (name, data) in columns {
            let name = name.into();
            if store.index.contains_key(&name) {
                return Err(Error::invalid_configuration(format!(
                    "duplicate column name '{name}'"
                )));
            }
            store.index.insert(name.clone(), store.names.len());
            store.names.push(name);
            store.columns.push(data);
        }
        Ok(store)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Values of the column called `name`.
    pub fn get(&self, name: &str) -> Result<&ColumnData> {
        self.index
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| Error::key_not_found(name))
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of rows: the length of the longest column, 0 without columns.
    ///
    /// When every column has the same length this is simply that length.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(ColumnData::len).max().unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True when columns differ in length, which only happens after ingesting
    /// rows with missing fields.
    pub fn is_ragged(&self) -> bool {
        let rows = self.row_count();
        self.columns.iter().any(|c| c.len() != rows)
    }

    /// `(name, values)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnData)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Gather the rows at `rows` (in the given order) into a new store with
    /// the same columns.
    pub fn take_rows(&self, rows: &[usize]) -> ColumnStore {
        let columns = self.columns.iter().map(|c| c.take(rows)).collect();
        ColumnStore {
            names: self.names.clone(),
            columns,
            index: self.index.clone(),
        }
    }
}
