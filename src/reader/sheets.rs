use std::fmt;

use arrow::array::{Array, Float64Array};
use arrow::datatypes::Field;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::{ReaderError, WorkbookReader};
use crate::dataset::{AxisRole, Cell, Column, Dataset};
use crate::schema::{FIELD_ANNOTATION, FIELD_AXIS, FIELD_LENGTH, FIELD_LONG_NAME};

/// Summary of one stored column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Long name including units
    pub long_name: String,
    /// Plot role
    pub axis: AxisRole,
    /// Annotation text, if any
    pub annotation: Option<String>,
    /// Column length including padding
    pub length: usize,
    /// Number of non-missing cells
    pub value_count: usize,
}

impl From<&Column> for ColumnSummary {
    fn from(column: &Column) -> Self {
        Self {
            long_name: column.name.clone(),
            axis: column.axis,
            annotation: column.annotation.clone(),
            length: column.len(),
            value_count: column.value_count(),
        }
    }
}

/// Summary of one stored sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    /// Sheet name
    pub name: String,
    /// Technique display name
    pub display_name: String,
    /// Number of rows
    pub row_count: usize,
    /// Columns in order
    pub columns: Vec<ColumnSummary>,
}

impl fmt::Display for SheetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}]: {} columns, {} rows",
            self.name,
            self.display_name,
            self.columns.len(),
            self.row_count
        )?;
        for column in &self.columns {
            write!(
                f,
                "  {:<10} [{}] {:>8}/{:<8}",
                column.long_name, column.axis, column.value_count, column.length
            )?;
            if let Some(annotation) = &column.annotation {
                write!(f, " {}", annotation)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl WorkbookReader {
    /// Rebuild the dataset stored under `name`
    pub fn read_dataset(&self, name: &str) -> Result<Dataset, ReaderError> {
        let entry = self
            .manifest
            .sheet(name)
            .ok_or_else(|| ReaderError::SheetNotFound(name.to_string()))?;
        let bytes = self
            .sheets
            .get(name)
            .ok_or_else(|| ReaderError::SheetNotFound(name.to_string()))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(bytes.clone())?;
        let schema = builder.schema().clone();
        let mut cells: Vec<Vec<Cell>> = vec![Vec::new(); schema.fields().len()];

        for batch in builder.build()? {
            let batch = batch?;
            for (idx, array) in batch.columns().iter().enumerate() {
                let values = array
                    .as_any()
                    .downcast_ref::<Float64Array>()
                    .ok_or_else(|| {
                        ReaderError::InvalidFormat(format!(
                            "Column '{}' of sheet '{}' is not Float64",
                            schema.field(idx).name(),
                            name
                        ))
                    })?;
                cells[idx].extend(values.iter().map(Cell::from));
            }
        }

        let columns = schema
            .fields()
            .iter()
            .zip(cells)
            .map(|(field, values)| column_from_field(field, values))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset {
            technique: entry.technique,
            params: entry.params.clone(),
            columns,
        })
    }

    /// Summaries of every sheet in manifest order
    pub fn summaries(&self) -> Result<Vec<SheetSummary>, ReaderError> {
        self.manifest
            .sheets
            .iter()
            .map(|entry| {
                let dataset = self.read_dataset(&entry.name)?;
                Ok(SheetSummary {
                    name: entry.name.clone(),
                    display_name: entry.display_name.clone(),
                    row_count: dataset.row_count(),
                    columns: dataset.columns.iter().map(ColumnSummary::from).collect(),
                })
            })
            .collect()
    }
}

fn column_from_field(field: &Field, mut values: Vec<Cell>) -> Result<Column, ReaderError> {
    let metadata = field.metadata();
    let meta = |key: &str| {
        metadata.get(key).ok_or_else(|| {
            ReaderError::MetadataError(format!("Field '{}' missing {}", field.name(), key))
        })
    };

    let name = meta(FIELD_LONG_NAME)?.clone();
    let axis = meta(FIELD_AXIS)?
        .parse::<AxisRole>()
        .map_err(ReaderError::MetadataError)?;
    let length = meta(FIELD_LENGTH)?.parse::<usize>().map_err(|e| {
        ReaderError::MetadataError(format!("Field '{}' has bad length: {}", field.name(), e))
    })?;

    // Drop the tail padding added to reach the sheet's row count
    values.truncate(length);

    Ok(Column {
        name,
        values,
        axis,
        annotation: metadata.get(FIELD_ANNOTATION).cloned(),
    })
}
