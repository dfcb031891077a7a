use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::corrtest::{ExperimentParams, Technique};

/// One cell of an output column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Measured or derived number
    Value(f64),
    /// No data for this row (padding in per-cycle columns)
    Missing,
}

impl Cell {
    /// Numeric content, `None` for [`Cell::Missing`]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Value(v) => Some(*v),
            Cell::Missing => None,
        }
    }

    /// Whether this cell is padding
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Value(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Value).unwrap_or(Cell::Missing)
    }
}

/// Plot role of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRole {
    /// Abscissa for the Y columns that follow it
    X,
    /// Ordinate
    #[default]
    Y,
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => write!(f, "X"),
            AxisRole::Y => write!(f, "Y"),
        }
    }
}

impl FromStr for AxisRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(AxisRole::X),
            "Y" | "y" => Ok(AxisRole::Y),
            other => Err(format!("Unknown axis role '{}'", other)),
        }
    }
}

/// Named, labeled column of a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Long name including units, e.g. `I, A`
    pub name: String,
    /// Cells in row order
    pub values: Vec<Cell>,
    /// Plot role
    pub axis: AxisRole,
    /// Free-text comment shown with the column
    pub annotation: Option<String>,
}

impl Column {
    /// Y column without annotation
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Cell::Value).collect(),
            axis: AxisRole::Y,
            annotation: None,
        }
    }

    /// Column holding `values` at rows `start..start + values.len()`, padded
    /// with [`Cell::Missing`] before and after up to `total_len` rows.
    pub fn padded(
        name: impl Into<String>,
        start: usize,
        values: &[f64],
        total_len: usize,
    ) -> Self {
        let end = start + values.len();
        let mut cells = Vec::with_capacity(total_len.max(end));
        cells.resize(start, Cell::Missing);
        cells.extend(values.iter().copied().map(Cell::Value));
        if cells.len() < total_len {
            cells.resize(total_len, Cell::Missing);
        }
        Self {
            name: name.into(),
            values: cells,
            axis: AxisRole::Y,
            annotation: None,
        }
    }

    /// Mark this column as the X axis
    pub fn as_x(mut self) -> Self {
        self.axis = AxisRole::X;
        self
    }

    /// Attach an annotation
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Number of rows including padding
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-missing cells
    pub fn value_count(&self) -> usize {
        self.values.iter().filter(|c| !c.is_missing()).count()
    }
}

/// Converted experiment: the ordered columns of one export file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Technique that produced the file
    pub technique: Technique,
    /// Parameters decoded from the metadata line
    pub params: ExperimentParams,
    /// Columns in presentation order
    pub columns: Vec<Column>,
}

impl Dataset {
    /// Technique display name, e.g. `CV`
    pub fn display_name(&self) -> &'static str {
        self.technique.display_name()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Length of the longest column
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}): {} columns, {} rows",
            self.display_name(),
            self.technique.id(),
            self.column_count(),
            self.row_count()
        )?;
        for (idx, column) in self.columns.iter().enumerate() {
            write!(
                f,
                "  {:3}. {:<10} [{}] {:>8} values",
                idx + 1,
                column.name,
                column.axis,
                column.value_count()
            )?;
            if let Some(annotation) = &column.annotation {
                write!(f, "  {}", annotation)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Output layout for a saved workbook
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Single ZIP container with one Parquet file per sheet (default)
    #[default]
    Container,
    /// Directory with one CSV file per sheet
    CsvDirectory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_column() {
        let column = Column::padded("I, A", 2, &[1.0, 2.0], 6);
        assert_eq!(column.len(), 6);
        assert_eq!(column.value_count(), 2);
        assert_eq!(
            column.values,
            vec![
                Cell::Missing,
                Cell::Missing,
                Cell::Value(1.0),
                Cell::Value(2.0),
                Cell::Missing,
                Cell::Missing
            ]
        );
    }

    #[test]
    fn test_padded_column_at_end() {
        let column = Column::padded("Q, C", 1, &[0.0, 0.5], 3);
        assert_eq!(column.values.last(), Some(&Cell::Value(0.5)));
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_builders() {
        let column = Column::new("E, V", [0.1, 0.2]).as_x().with_annotation("note");
        assert_eq!(column.axis, AxisRole::X);
        assert_eq!(column.annotation.as_deref(), Some("note"));
        assert_eq!(Column::new("I, A", [1.0]).axis, AxisRole::Y);
    }

    #[test]
    fn test_axis_role_parse() {
        assert_eq!("X".parse::<AxisRole>().unwrap(), AxisRole::X);
        assert_eq!("y".parse::<AxisRole>().unwrap(), AxisRole::Y);
        assert!("Z".parse::<AxisRole>().is_err());
    }

    #[test]
    fn test_cell_conversions() {
        assert_eq!(Cell::from(Some(1.0)), Cell::Value(1.0));
        assert_eq!(Cell::from(None), Cell::Missing);
        assert_eq!(Cell::Missing.as_f64(), None);
    }
}
