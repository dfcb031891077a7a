//! Manifest schema for corrbook workbook containers.
//!
//! The manifest.json entry lists the sheets of a workbook so readers can
//! enumerate datasets before opening any Parquet file.

use serde::{Deserialize, Serialize};

use super::constants::{CORRBOOK_FORMAT_VERSION, SHEETS_DIR};
use crate::corrtest::{ExperimentParams, Technique};
use crate::dataset::Dataset;

/// One sheet listed in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetEntry {
    /// Unique sheet name (usually the source file stem)
    pub name: String,
    /// Path of the sheet inside the container
    pub path: String,
    /// Technique that produced the dataset
    pub technique: Technique,
    /// Firmware identifier, e.g. `ID_CV`
    pub technique_id: String,
    /// Display name, e.g. `CV`
    pub display_name: String,
    /// Number of columns
    pub column_count: usize,
    /// Number of rows (longest column)
    pub row_count: usize,
    /// Experiment parameters of the source file
    pub params: ExperimentParams,
}

impl SheetEntry {
    /// Describe `dataset` stored under `name`
    pub fn new(name: &str, dataset: &Dataset) -> Self {
        Self {
            name: name.to_string(),
            path: sheet_path(name),
            technique: dataset.technique,
            technique_id: dataset.technique.id().to_string(),
            display_name: dataset.display_name().to_string(),
            column_count: dataset.column_count(),
            row_count: dataset.row_count(),
            params: dataset.params.clone(),
        }
    }
}

/// Container path of a sheet
pub fn sheet_path(name: &str) -> String {
    format!("{}/{}.parquet", SHEETS_DIR, name)
}

/// Workbook manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Format version (e.g., "1.0.0")
    pub format_version: String,
    /// Random identifier of this workbook
    pub workbook_id: String,
    /// ISO 8601 timestamp of when the file was created
    pub created: String,
    /// Name and version of the converter that created the file
    pub converter: String,
    /// Sheets in submission order
    pub sheets: Vec<SheetEntry>,
}

impl Manifest {
    /// Creates an empty manifest stamped with the current time
    pub fn new() -> Self {
        Self {
            format_version: CORRBOOK_FORMAT_VERSION.to_string(),
            workbook_id: uuid::Uuid::new_v4().to_string(),
            created: chrono::Utc::now().to_rfc3339(),
            converter: format!("corrbook v{}", env!("CARGO_PKG_VERSION")),
            sheets: Vec::new(),
        }
    }

    /// Find a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&SheetEntry> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}
