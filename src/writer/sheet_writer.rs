use std::collections::HashMap;
use std::io::Write;

use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use log::debug;
use parquet::arrow::ArrowWriter;

use super::config::WriterConfig;
use super::error::WriterError;
use super::stats::SheetStats;
use crate::dataset::{Column, Dataset};
use crate::schema::{
    create_sheet_schema_arc, sheet_arrays, CORRBOOK_FORMAT_VERSION, KEY_EXPERIMENT_PARAMS,
    KEY_FORMAT_VERSION, KEY_SHEET_NAME, KEY_TECHNIQUE,
};

/// Write `dataset` as a single Parquet sheet to `writer`.
///
/// The whole dataset goes out as one record batch; the writer splits it into
/// row groups according to [`WriterConfig::row_group_size`]. Returns the
/// underlying writer so in-memory buffers can be recovered.
pub fn write_sheet<W: Write + Send>(
    writer: W,
    sheet_name: &str,
    dataset: &Dataset,
    config: &WriterConfig,
) -> Result<(W, SheetStats), WriterError> {
    let mut metadata = HashMap::new();
    metadata.insert(
        KEY_FORMAT_VERSION.to_string(),
        CORRBOOK_FORMAT_VERSION.to_string(),
    );
    metadata.insert(KEY_SHEET_NAME.to_string(), sheet_name.to_string());
    metadata.insert(KEY_TECHNIQUE.to_string(), dataset.technique.id().to_string());
    metadata.insert(
        KEY_EXPERIMENT_PARAMS.to_string(),
        serde_json::to_string(&dataset.params)?,
    );

    let schema = create_sheet_schema_arc(dataset);
    let props = config.to_writer_properties(&metadata);
    let mut arrow_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))?;

    let rows = dataset.row_count();
    let options = RecordBatchOptions::new().with_row_count(Some(rows));
    let batch = RecordBatch::try_new_with_options(schema, sheet_arrays(dataset), &options)?;
    arrow_writer.write(&batch)?;
    arrow_writer.flush()?;

    let row_groups_written = arrow_writer.flushed_row_groups().len();
    let writer = arrow_writer.into_inner()?;

    let stats = SheetStats {
        columns_written: dataset.column_count(),
        rows_written: rows,
        values_written: dataset.columns.iter().map(Column::value_count).sum(),
        row_groups_written,
    };
    debug!("Sheet '{}': {}", sheet_name, stats);

    Ok((writer, stats))
}
