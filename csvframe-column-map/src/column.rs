use crate::types::{ColumnType, ValueRef};

/// Values of a single column, stored in one typed vector.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Utf8(Vec<String>),
    Int64(Vec<i64>),
    Float64(Vec<f64>),
}

impl ColumnData {
    /// An empty column of the given type.
    pub fn empty(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Utf8 => ColumnData::Utf8(Vec::new()),
            ColumnType::Int64 => ColumnData::Int64(Vec::new()),
            ColumnType::Float64 => ColumnData::Float64(Vec::new()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Utf8(_) => ColumnType::Utf8,
            ColumnData::Int64(_) => ColumnType::Int64,
            ColumnData::Float64(_) => ColumnType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Utf8(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `row`, or `None` past the end of the column.
    pub fn value(&self, row: usize) -> Option<ValueRef<'_>> {
        match self {
            ColumnData::Utf8(v) => v.get(row).map(|s| ValueRef::Utf8(s.as_str())),
            ColumnData::Int64(v) => v.get(row).copied().map(ValueRef::Int64),
            ColumnData::Float64(v) => v.get(row).copied().map(ValueRef::Float64),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ValueRef<'_>> + '_ {
        (0..self.len()).filter_map(move |row| self.value(row))
    }

    pub fn as_utf8(&self) -> Option<&[String]> {
        match self {
            ColumnData::Utf8(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<&[i64]> {
        match self {
            ColumnData::Int64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<&[f64]> {
        match self {
            ColumnData::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// Gather the values at `rows` into a new column.
    ///
    /// Indices past the end of this column are skipped, so gathering from a
    /// short column yields a short result rather than failing.
    pub fn take(&self, rows: &[usize]) -> ColumnData {
        fn gather<T: Clone>(values: &[T], rows: &[usize]) -> Vec<T> {
            rows.iter()
                .filter_map(|&row| values.get(row).cloned())
                .collect()
        }

        match self {
            ColumnData::Utf8(v) => ColumnData::Utf8(gather(v, rows)),
            ColumnData::Int64(v) => ColumnData::Int64(gather(v, rows)),
            ColumnData::Float64(v) => ColumnData::Float64(gather(v, rows)),
        }
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(values: Vec<String>) -> Self {
        ColumnData::Utf8(values)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(values: Vec<&str>) -> Self {
        ColumnData::Utf8(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(values: Vec<i64>) -> Self {
        ColumnData::Int64(values)
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(values: Vec<f64>) -> Self {
        ColumnData::Float64(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_skips_rows_past_the_end() {
        let column = ColumnData::from(vec![10i64, 20, 30]);
        assert_eq!(column.take(&[2, 0, 5]), ColumnData::Int64(vec![30, 10]));
    }

    #[test]
    fn value_reports_end_of_column() {
        let column = ColumnData::from(vec!["a", "b"]);
        assert_eq!(column.value(1), Some(ValueRef::Utf8("b")));
        assert_eq!(column.value(2), None);
        assert_eq!(column.column_type(), ColumnType::Utf8);
    }
}
