use std::collections::HashMap;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Builder};
use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

use super::constants::{
    FIELD_ANNOTATION, FIELD_AXIS, FIELD_LENGTH, FIELD_LONG_NAME, KEY_FORMAT_VERSION,
    CORRBOOK_FORMAT_VERSION,
};
use crate::dataset::{Cell, Column, Dataset};

/// Positional field name of the column at `index`
pub fn field_name(index: usize, column: &Column) -> String {
    format!("{:02} {}", index + 1, column.name)
}

fn column_field(index: usize, column: &Column) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert(FIELD_LONG_NAME.to_string(), column.name.clone());
    metadata.insert(FIELD_AXIS.to_string(), column.axis.to_string());
    metadata.insert(FIELD_LENGTH.to_string(), column.len().to_string());
    if let Some(annotation) = &column.annotation {
        metadata.insert(FIELD_ANNOTATION.to_string(), annotation.clone());
    }
    Field::new(field_name(index, column), DataType::Float64, true).with_metadata(metadata)
}

/// Arrow schema for one dataset sheet.
///
/// ```
/// use corrbook::corrtest::{ExperimentParams, Technique};
/// use corrbook::dataset::{Column, Dataset};
/// use corrbook::schema::create_sheet_schema;
///
/// let dataset = Dataset {
///     technique: Technique::OpenCircuit,
///     params: ExperimentParams::default(),
///     columns: vec![
///         Column::new("time, s", [0.0, 1.0]).as_x(),
///         Column::new("E, V", [0.3, 0.3]),
///     ],
/// };
/// let schema = create_sheet_schema(&dataset);
/// assert_eq!(schema.fields().len(), 2);
/// assert_eq!(schema.field(0).name(), "01 time, s");
/// ```
pub fn create_sheet_schema(dataset: &Dataset) -> Schema {
    let mut builder = SchemaBuilder::new();
    for (index, column) in dataset.columns.iter().enumerate() {
        builder.push(column_field(index, column));
    }

    let mut metadata = HashMap::new();
    metadata.insert(
        KEY_FORMAT_VERSION.to_string(),
        CORRBOOK_FORMAT_VERSION.to_string(),
    );

    builder.finish().with_metadata(metadata)
}

/// Arc-wrapped version of [`create_sheet_schema`]
pub fn create_sheet_schema_arc(dataset: &Dataset) -> Arc<Schema> {
    Arc::new(create_sheet_schema(dataset))
}

/// One nullable `Float64` array per column, all `dataset.row_count()` long
pub fn sheet_arrays(dataset: &Dataset) -> Vec<ArrayRef> {
    let rows = dataset.row_count();
    dataset
        .columns
        .iter()
        .map(|column| {
            let mut builder = Float64Builder::with_capacity(rows);
            for cell in &column.values {
                match cell {
                    Cell::Value(v) => builder.append_value(*v),
                    Cell::Missing => builder.append_null(),
                }
            }
            for _ in column.len()..rows {
                builder.append_null();
            }
            Arc::new(builder.finish()) as ArrayRef
        })
        .collect()
}
