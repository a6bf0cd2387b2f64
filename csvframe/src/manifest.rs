//! Pipeline manifest: which tables to ingest and which merges to run.
//!
//! Two JSON layouts are accepted. The legacy layout is a bare array of table
//! entries and implies [`legacy_merge_plan`]:
//!
//! ```json
//! [
//!   { "path": "input/SAMPLE.csv", "header_columns": ["CUSTOMER_CODE"], "data_types": ["CHAR"] },
//!   ...
//! ]
//! ```
//!
//! The explicit layout names its merge steps:
//!
//! ```json
//! {
//!   "tables": [ ... ],
//!   "merges": [
//!     { "left": 1, "right": 0, "key": "CUSTOMER_CODE", "output": "customer_merged.csv" },
//!     { "left": 3, "right": 2, "key": { "right_column": 1 }, "output": "item_merged.csv" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use csvframe_csv::IngestSchema;
use csvframe_result::{Error, Result};
use serde::Deserialize;

/// One input table: where to read it and how to name and type its fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableSpec {
    pub path: PathBuf,
    pub header_columns: Vec<String>,
    pub data_types: Vec<String>,
}

impl TableSpec {
    pub fn schema(&self) -> Result<IngestSchema> {
        IngestSchema::from_identifiers(&self.header_columns, &self.data_types)
    }
}

/// How a merge step picks its key column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeySelector {
    /// A column name, looked up in both tables.
    Name(String),
    /// The name of the right table's n-th declared column.
    RightColumn { right_column: usize },
}

/// Filter table `left` by key membership in table `right` and export the
/// result to `output`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeStep {
    pub left: usize,
    pub right: usize,
    pub key: KeySelector,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub tables: Vec<TableSpec>,
    pub merges: Vec<MergeStep>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestFile {
    Legacy(Vec<TableSpec>),
    Explicit {
        tables: Vec<TableSpec>,
        #[serde(default)]
        merges: Vec<MergeStep>,
    },
}

/// The fixed chain used by legacy manifests, over tables
/// `0 = sample, 1 = customer, 2 = invoice, 3 = item`:
///
/// 1. customer filtered by sample, keyed on sample's first column
/// 2. invoice filtered by customer, keyed on customer's first column
/// 3. item filtered by invoice, keyed on invoice's second column
pub fn legacy_merge_plan() -> Vec<MergeStep> {
    let step = |left, right, right_column, output: &str| MergeStep {
        left,
        right,
        key: KeySelector::RightColumn { right_column },
        output: PathBuf::from(output),
    };
    vec![
        step(1, 0, 0, "customer_merged.csv"),
        step(2, 1, 0, "invoice_merged.csv"),
        step(3, 2, 1, "item_merged.csv"),
    ]
}

impl Manifest {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: ManifestFile = serde_json::from_str(json)
            .map_err(|err| Error::invalid_configuration(format!("malformed manifest: {err}")))?;

        let manifest = match parsed {
            ManifestFile::Legacy(tables) => Manifest {
                tables,
                merges: legacy_merge_plan(),
            },
            ManifestFile::Explicit { tables, merges } => Manifest { tables, merges },
        };
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("reading manifest {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn table(&self, idx: usize) -> Result<&TableSpec> {
        self.tables.get(idx).ok_or_else(|| {
            Error::invalid_configuration(format!(
                "table index {idx} out of range (manifest has {} tables)",
                self.tables.len()
            ))
        })
    }

    /// Resolve the key column name for `step`.
    pub fn key_column<'a>(&'a self, step: &'a MergeStep) -> Result<&'a str> {
        match &step.key {
            KeySelector::Name(name) => Ok(name.as_str()),
            KeySelector::RightColumn { right_column } => {
                let right = self.table(step.right)?;
                right
                    .header_columns
                    .get(*right_column)
                    .map(String::as_str)
                    .ok_or_else(|| {
                        Error::invalid_configuration(format!(
                            "table {} has no column at position {right_column}",
                            step.right
                        ))
                    })
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for table in &self.tables {
            table.schema()?;
        }
        for step in &self.merges {
            self.table(step.left)?;
            self.table(step.right)?;
            self.key_column(step)?;
        }
        Ok(())
    }
}
