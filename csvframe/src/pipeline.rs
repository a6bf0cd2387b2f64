//! Run a [`Manifest`]: ingest tables on demand, merge, export.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use csvframe_column_map::ColumnStore;
use csvframe_csv::{CsvReadOptions, CsvWriteOptions, export_csv, read_csv};
use csvframe_join::semi_join_filter;
use csvframe_result::Result;

use crate::manifest::Manifest;

/// Outcome of one executed merge step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    pub left: usize,
    pub right: usize,
    pub key_column: String,
    pub left_rows: usize,
    pub rows_written: usize,
    pub output: PathBuf,
}

/// Executes the merge steps of a manifest in order.
///
/// Each table is ingested at most once, the first time a step needs it.
/// Steps always read the ingested tables, never an earlier step's output.
/// The first failure stops the run; files exported by earlier steps stay on
/// disk.
pub struct Pipeline<'m> {
    manifest: &'m Manifest,
    out_dir: PathBuf,
    read_options: CsvReadOptions,
    write_options: CsvWriteOptions,
    tables: Vec<OnceCell<ColumnStore>>,
}

impl<'m> Pipeline<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            out_dir: PathBuf::from("."),
            read_options: CsvReadOptions::default(),
            write_options: CsvWriteOptions::default(),
            tables: (0..manifest.tables.len()).map(|_| OnceCell::new()).collect(),
        }
    }

    /// Directory that relative step outputs are resolved against.
    pub fn with_out_dir<P: AsRef<Path>>(mut self, out_dir: P) -> Self {
        self.out_dir = out_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_read_options(mut self, options: CsvReadOptions) -> Self {
        self.read_options = options;
        self
    }

    pub fn with_write_options(mut self, options: CsvWriteOptions) -> Self {
        self.write_options = options;
        self
    }

    /// The ingested table at `idx`, loading it on first use.
    pub fn table(&self, idx: usize) -> Result<&ColumnStore> {
        let spec = self.manifest.table(idx)?;
        let cell = &self.tables[idx];
        if let Some(store) = cell.get() {
            return Ok(store);
        }

        tracing::info!("ingesting table {} from {}", idx, spec.path.display());
        let store = read_csv(&spec.path, &spec.schema()?, &self.read_options)?;
        Ok(cell.get_or_init(|| store))
    }

    pub fn run(&self) -> Result<Vec<StepSummary>> {
        let manifest = self.manifest;
        let mut summaries = Vec::with_capacity(manifest.merges.len());

        for step in &manifest.merges {
            let key_column = manifest.key_column(step)?;
            let left = self.table(step.left)?;
            let right = self.table(step.right)?;

            let merged = semi_join_filter(left, right, key_column)?;
            let output = self.out_dir.join(&step.output);
            let rows_written = export_csv(&merged, &output, &self.write_options)?;
            tracing::info!(
                "merged table {} with table {} on '{}': {} -> {} rows, wrote {}",
                step.left,
                step.right,
                key_column,
                left.row_count(),
                rows_written,
                output.display()
            );

            summaries.push(StepSummary {
                left: step.left,
                right: step.right,
                key_column: key_column.to_string(),
                left_rows: left.row_count(),
                rows_written,
                output,
            });
        }

        Ok(summaries)
    }
}
