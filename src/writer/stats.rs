use std::fmt;

/// Statistics from a completed sheet write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetStats {
    /// Number of columns written
    pub columns_written: usize,
    /// Number of rows (longest column)
    pub rows_written: usize,
    /// Number of non-null cells
    pub values_written: usize,
    /// Number of Parquet row groups written
    pub row_groups_written: usize,
}

impl fmt::Display for SheetStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} columns x {} rows ({} values) in {} row groups",
            self.columns_written, self.rows_written, self.values_written, self.row_groups_written
        )
    }
}
