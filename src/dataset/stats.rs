use std::fmt;
use std::path::PathBuf;

/// Statistics from a completed save
#[derive(Debug, Clone)]
pub struct SaveStats {
    /// Path that was written
    pub path: PathBuf,

    /// Number of sheets written
    pub sheets_written: usize,

    /// Number of columns across all sheets
    pub columns_written: usize,

    /// Number of non-missing cells across all sheets
    pub values_written: usize,

    /// Total output size in bytes
    pub total_size_bytes: u64,
}

impl fmt::Display for SaveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} sheets, {} columns, {} values, {} bytes",
            self.path.display(),
            self.sheets_written,
            self.columns_written,
            self.values_written,
            self.total_size_bytes
        )
    }
}
