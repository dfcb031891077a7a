use std::path::Path;

use super::csv_writer::CsvDirectoryWriter;
use super::error::SinkError;
use super::stats::SaveStats;
use super::types::{Dataset, OutputMode};
use super::writer_impl::WorkbookWriter;
use crate::writer::WriterConfig;

/// Destination for converted datasets.
///
/// Datasets are submitted one by one and written together by [`save`].
///
/// [`save`]: DatasetSink::save
pub trait DatasetSink {
    /// Queue `dataset` as a sheet; returns the unique sheet name assigned
    fn submit(&mut self, sheet_name: &str, dataset: Dataset) -> Result<String, SinkError>;

    /// Number of queued sheets
    fn len(&self) -> usize;

    /// Whether nothing was submitted
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write every queued sheet to `path`. Refuses to overwrite.
    fn save(&self, path: &Path) -> Result<SaveStats, SinkError>;
}

/// Create the sink for an output mode
pub fn create_sink(mode: OutputMode, config: WriterConfig) -> Box<dyn DatasetSink> {
    match mode {
        OutputMode::Container => Box::new(WorkbookWriter::new(config)),
        OutputMode::CsvDirectory => Box::new(CsvDirectoryWriter::new()),
    }
}

/// Shared preconditions of every save
pub(super) fn check_output_path(path: &Path) -> Result<(), SinkError> {
    if path.as_os_str().is_empty() {
        return Err(SinkError::InvalidPath("Empty path".to_string()));
    }
    if path.exists() {
        return Err(SinkError::AlreadyExists(path.display().to_string()));
    }
    Ok(())
}
