//! Arrow interop: convert a [`ColumnStore`] into a `RecordBatch` and render it
//! as a text table.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use csvframe_result::Result;

use crate::column::ColumnData;
use crate::store::ColumnStore;
use crate::types::ColumnType;

impl From<ColumnType> for DataType {
    fn from(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Utf8 => DataType::Utf8,
            ColumnType::Int64 => DataType::Int64,
            ColumnType::Float64 => DataType::Float64,
        }
    }
}

fn build_array(data: &ColumnData, rows: usize) -> ArrayRef {
    // Short columns are padded with nulls up to `rows`.
    match data {
        ColumnData::Utf8(values) => {
            let bytes = values.iter().map(String::len).sum();
            let mut builder = StringBuilder::with_capacity(rows, bytes);
            for value in values {
                builder.append_value(value);
            }
            for _ in values.len()..rows {
                builder.append_null();
            }
            Arc::new(builder.finish())
        }
        ColumnData::Int64(values) => {
            let mut builder = Int64Builder::with_capacity(rows);
            builder.append_slice(values);
            for _ in values.len()..rows {
                builder.append_null();
            }
            Arc::new(builder.finish())
        }
        ColumnData::Float64(values) => {
            let mut builder = Float64Builder::with_capacity(rows);
            builder.append_slice(values);
            for _ in values.len()..rows {
                builder.append_null();
            }
            Arc::new(builder.finish())
        }
    }
}

impl ColumnStore {
    /// Arrow schema matching this store's columns. Every field is nullable
    /// because short columns are null-padded in [`ColumnStore::to_record_batch`].
    pub fn arrow_schema(&self) -> Schema {
        let fields: Vec<Field> = self
            .columns()
            .map(|(name, data)| Field::new(name, data.column_type().into(), true))
            .collect();
        Schema::new(fields)
    }

    /// Copy this store into a single Arrow `RecordBatch`.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let schema = Arc::new(self.arrow_schema());
        if self.is_empty() {
            return Ok(RecordBatch::new_empty(schema));
        }

        let rows = self.row_count();
        let arrays: Vec<ArrayRef> = self
            .columns()
            .map(|(_, data)| build_array(data, rows))
            .collect();
        Ok(RecordBatch::try_new(schema, arrays)?)
    }

    /// Render the store as a bordered text table, header first.
    pub fn pretty_format(&self) -> Result<String> {
        let batch = self.to_record_batch()?;
        tracing::trace!(
            "formatting column store with {} rows x {} columns",
            batch.num_rows(),
            batch.num_columns()
        );
        Ok(pretty_format_batches(&[batch])?.to_string())
    }
}
