use crate::writer::WriterError;

/// Errors that can occur while collecting or saving datasets
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the underlying sheet writer
    #[error("Writer error: {0}")]
    WriterError(#[from] WriterError),

    /// Error writing CSV output
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error serializing/deserializing JSON
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Error from the ZIP container library
    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// Invalid or malformed output path
    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    /// Output already exists at the specified location
    #[error("Output already exists: {0}")]
    AlreadyExists(String),

    /// Save was requested with no datasets submitted
    #[error("No datasets to save")]
    Empty,
}
