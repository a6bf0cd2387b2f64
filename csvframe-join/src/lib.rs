//! Key-membership merge of two column stores.
//!
//! [`semi_join_filter`] keeps the rows of the left store whose key value
//! appears anywhere in the right store's key column. It is a left semi join,
//! not a relational join:
//!
//! - the output has exactly the left store's columns, in the left order;
//!   nothing from the right store is copied;
//! - surviving rows keep their left-store order;
//! - duplicate keys on the right never duplicate output rows, since the test
//!   is set membership rather than a match count.
//!
//! Membership is answered by a hash set built once from the right key column,
//! so a merge is O(N+M).
#![forbid(unsafe_code)]

mod key;

use csvframe_column_map::ColumnStore;
use csvframe_result::Result;
use rustc_hash::FxHashSet;

use crate::key::KeyValue;

/// Rows of `left` whose `key_column` value is present in `right`'s
/// `key_column`, as a new store with `left`'s columns.
///
/// Fails with [`Error::KeyNotFound`](csvframe_result::Error::KeyNotFound)
/// when either store lacks `key_column`.
///
/// ```
/// use csvframe_column_map::{ColumnData, ColumnStore};
/// use csvframe_join::semi_join_filter;
///
/// let left = ColumnStore::from_columns([
///     ("ID", ColumnData::from(vec![1i64, 2, 3])),
///     ("NAME", ColumnData::from(vec!["a", "b", "c"])),
/// ])
/// .unwrap();
/// let right = ColumnStore::from_columns([("ID", ColumnData::from(vec![2i64, 3, 4]))]).unwrap();
///
/// let merged = semi_join_filter(&left, &right, "ID").unwrap();
/// assert_eq!(merged.get("ID").unwrap(), &ColumnData::from(vec![2i64, 3]));
/// assert_eq!(merged.get("NAME").unwrap(), &ColumnData::from(vec!["b", "c"]));
/// ```
pub fn semi_join_filter(
    left: &ColumnStore,
    right: &ColumnStore,
    key_column: &str,
) -> Result<ColumnStore> {
    let left_keys = left.get(key_column)?;
    let right_keys = right.get(key_column)?;

    let lookup: FxHashSet<KeyValue<'_>> = right_keys
        .iter()
        .filter_map(KeyValue::from_value)
        .collect();

    let matching_rows: Vec<usize> = left_keys
        .iter()
        .enumerate()
        .filter(|(_, value)| KeyValue::from_value(*value).is_some_and(|k| lookup.contains(&k)))
        .map(|(row, _)| row)
        .collect();

    tracing::debug!(
        "semi join on '{}': {} of {} left rows matched {} distinct right keys",
        key_column,
        matching_rows.len(),
        left_keys.len(),
        lookup.len()
    );

    Ok(left.take_rows(&matching_rows))
}

/// Extension trait exposing [`semi_join_filter`] as a method.
pub trait ColumnStoreMergeExt {
    /// Filter `self` to the rows whose `key_column` value occurs in `other`.
    ///
    /// Only `self`'s columns appear in the result; see [`semi_join_filter`].
    fn merge(&self, other: &ColumnStore, key_column: &str) -> Result<ColumnStore>;
}

impl ColumnStoreMergeExt for ColumnStore {
    fn merge(&self, other: &ColumnStore, key_column: &str) -> Result<ColumnStore> {
        semi_join_filter(self, other, key_column)
    }
}
