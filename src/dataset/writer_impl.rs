use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

use crate::schema::manifest::{sheet_path, Manifest, SheetEntry};
use crate::schema::{CORRBOOK_MIMETYPE, MANIFEST_ENTRY};
use crate::writer::{write_sheet, WriterConfig};

use super::error::SinkError;
use super::sink::{check_output_path, DatasetSink};
use super::stats::SaveStats;
use super::types::{Column, Dataset};
use super::workbook::Workbook;

/// Writes datasets into a single `.corrbook` ZIP container.
///
/// ```text
/// Data.corrbook (ZIP archive)
/// ├── mimetype                  # "application/vnd.corrbook" (stored, first entry)
/// ├── manifest.json             # Workbook manifest (Deflate compressed)
/// └── sheets/<name>.parquet     # One sheet per dataset (stored)
/// ```
///
/// Parquet sheets are stored uncompressed in the archive: they compress
/// their own pages, and stored entries can be read without inflating.
#[derive(Debug, Default)]
pub struct WorkbookWriter {
    workbook: Workbook,
    config: WriterConfig,
}

impl WorkbookWriter {
    /// Create an empty container writer
    pub fn new(config: WriterConfig) -> Self {
        Self {
            workbook: Workbook::new(),
            config,
        }
    }

    /// Queued sheets
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    fn write_container(&self, path: &Path) -> Result<(usize, usize), SinkError> {
        let file = File::create(path)?;
        let mut zip_writer = ZipWriter::new(BufWriter::new(file));

        // mimetype MUST be the first entry and uncompressed
        let stored = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(0o644);
        zip_writer.start_file("mimetype", stored)?;
        zip_writer.write_all(CORRBOOK_MIMETYPE.as_bytes())?;

        let mut manifest = Manifest::new();
        for sheet in self.workbook.sheets() {
            manifest.sheets.push(SheetEntry::new(&sheet.name, &sheet.dataset));
        }
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);
        zip_writer.start_file(MANIFEST_ENTRY, deflated)?;
        zip_writer.write_all(serde_json::to_string_pretty(&manifest)?.as_bytes())?;

        let mut columns_written = 0;
        let mut values_written = 0;
        for sheet in self.workbook.sheets() {
            let (buffer, stats) =
                write_sheet(Vec::new(), &sheet.name, &sheet.dataset, &self.config)?;
            zip_writer.start_file(sheet_path(&sheet.name), stored)?;
            zip_writer.write_all(&buffer)?;
            debug!("Stored sheet '{}' ({} bytes)", sheet.name, buffer.len());

            columns_written += stats.columns_written;
            values_written += stats.values_written;
        }

        let mut inner = zip_writer.finish()?;
        inner.flush()?;
        Ok((columns_written, values_written))
    }
}

impl DatasetSink for WorkbookWriter {
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

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let (columns_written, values_written) = match self.write_container(path) {
            Ok(counts) => counts,
            Err(e) => {
                // Do not leave a truncated container behind
                let _ = fs::remove_file(path);
                return Err(e);
            }
        };

        let stats = SaveStats {
            path: path.to_path_buf(),
            sheets_written: self.workbook.len(),
            columns_written,
            values_written,
            total_size_bytes: fs::metadata(path)?.len(),
        };
        info!("Saved workbook {}", stats);
        Ok(stats)
    }
}

/// Number of non-missing cells in `dataset`
pub(super) fn value_count(dataset: &Dataset) -> usize {
    dataset.columns.iter().map(Column::value_count).sum()
}
