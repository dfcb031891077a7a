//! # Workbook Reader Module
//!
//! Reads `.corrbook` containers written by
//! [`WorkbookWriter`](crate::dataset::WorkbookWriter) back into datasets.
//!
//! ```rust,no_run
//! use corrbook::reader::WorkbookReader;
//!
//! let reader = WorkbookReader::open("Data.corrbook")?;
//! for summary in reader.summaries()? {
//!     println!("{}", summary);
//! }
//! let dataset = reader.read_dataset("run_01")?;
//! # Ok::<(), corrbook::reader::ReaderError>(())
//! ```

mod error;
mod open;
mod sheets;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::path::PathBuf;

use bytes::Bytes;

pub use error::ReaderError;
pub use sheets::{ColumnSummary, SheetSummary};

use crate::schema::manifest::Manifest;

/// Reader for `.corrbook` workbook containers.
///
/// Sheets are loaded into memory when the container is opened; the ZIP file
/// is not kept open.
pub struct WorkbookReader {
    path: PathBuf,
    manifest: Manifest,
    sheets: HashMap<String, Bytes>,
}

impl WorkbookReader {
    /// Path the workbook was opened from
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Workbook manifest
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Sheet names in manifest order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.manifest.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}
