use std::fs;
use std::path::Path;

use log::{debug, info};

use super::error::SinkError;
use super::sink::{check_output_path, DatasetSink};
use super::stats::SaveStats;
use super::types::{Cell, Dataset};
use super::workbook::Workbook;
use super::writer_impl::value_count;

/// File extension of exported sheets
pub const CSV_EXTENSION: &str = "csv";

/// Writes one `<sheet>.csv` per dataset into a fresh directory.
///
/// Each file starts with three header rows: long name, axis role and
/// annotation. Missing cells, including the tail of short columns, are
/// written as empty fields.
#[derive(Debug, Default)]
pub struct CsvDirectoryWriter {
    workbook: Workbook,
}

impl CsvDirectoryWriter {
    /// Create an empty directory writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Queued sheets
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    fn write_sheets(&self, dir: &Path) -> Result<u64, SinkError> {
        let mut total_size_bytes = 0;
        for sheet in self.workbook.sheets() {
            let file_path = dir.join(format!("{}.{}", sheet.name, CSV_EXTENSION));
            write_csv(fs::File::create(&file_path)?, &sheet.dataset)?;
            let size = fs::metadata(&file_path)?.len();
            debug!("Wrote {} ({} bytes)", file_path.display(), size);
            total_size_bytes += size;
        }
        Ok(total_size_bytes)
    }
}

/// Write `dataset` as CSV text to `writer`
pub fn write_csv<W: std::io::Write>(writer: W, dataset: &Dataset) -> Result<(), SinkError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(dataset.columns.iter().map(|c| c.name.as_str()))?;
    csv_writer.write_record(dataset.columns.iter().map(|c| c.axis.to_string()))?;
    csv_writer.write_record(
        dataset
            .columns
            .iter()
            .map(|c| c.annotation.as_deref().unwrap_or("")),
    )?;

    for row in 0..dataset.row_count() {
        csv_writer.write_record(dataset.columns.iter().map(|c| {
            match c.values.get(row) {
                Some(Cell::Value(v)) => v.to_string(),
                Some(Cell::Missing) | None => String::new(),
            }
        }))?;
    }

    csv_writer.flush()?;
    Ok(())
}

impl DatasetSink for CsvDirectoryWriter {
    fn submit(&mut self, sheet_name: &str, dataset: Dataset) -> Result<String, SinkError> {
        Ok(self.workbook.add(sheet_name, dataset))
    }

    fn len(&self) -> usize {
        self.workbook.len()
    }

    fn save(&self, path: &Path) -> Result<SaveStats, SinkError> {
        check_output_path(path)?;
        if self.workbook.is_empty() {
            return Err(SinkError::Empty);
        }
        fs::create_dir_all(path)?;

        let total_size_bytes = match self.write_sheets(path) {
            Ok(size) => size,
            Err(e) => {
                // Do not leave a half-written directory behind
                let _ = fs::remove_dir_all(path);
                return Err(e);
            }
        };

        let sheets = self.workbook.sheets();
        let stats = SaveStats {
            path: path.to_path_buf(),
            sheets_written: sheets.len(),
            columns_written: sheets.iter().map(|s| s.dataset.column_count()).sum(),
            values_written: sheets.iter().map(|s| value_count(&s.dataset)).sum(),
            total_size_bytes,
        };
        info!("Saved CSV directory {}", stats);
        Ok(stats)
    }
}
