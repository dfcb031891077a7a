use std::io::Write;

use tempfile::tempdir;
use zip::write::SimpleFileOptions;

use super::*;
use crate::corrtest::{ExperimentParams, Technique};
use crate::dataset::{AxisRole, Column, Dataset, DatasetSink, WorkbookWriter};
use crate::writer::WriterConfig;

fn cv_dataset() -> Dataset {
    let mut params = ExperimentParams::default();
    params.insert("ExpType", "ID_CV");
    params.insert("Frq", "2");
    Dataset {
        technique: Technique::CyclicVoltammetry,
        params,
        columns: vec![
            Column::new("E, V", [0.0, 0.1, 0.2, 0.1]).as_x(),
            Column::padded("I, A", 0, &[1.0, 0.0], 4).with_annotation("Cycle 1"),
            Column::padded("I, A", 2, &[3.0, 4.0], 4).with_annotation("Cycle 2"),
            Column::new("lg(I)", [0.0, f64::NEG_INFINITY]),
        ],
    }
}

fn write_workbook(path: &std::path::Path) {
    let mut sink = WorkbookWriter::new(WriterConfig::default());
    sink.submit("cv", cv_dataset()).unwrap();
    sink.submit("cv", cv_dataset()).unwrap();
    sink.save(path).unwrap();
}

#[test]
fn test_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Data.corrbook");
    write_workbook(&path);

    let reader = WorkbookReader::open(&path).unwrap();
    assert_eq!(reader.sheet_names(), vec!["cv", "cv_2"]);
    assert_eq!(reader.manifest().sheets[0].display_name, "CV");

    let dataset = reader.read_dataset("cv_2").unwrap();
    assert_eq!(dataset, cv_dataset());
}

#[test]
fn test_summaries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Data.corrbook");
    write_workbook(&path);

    let reader = WorkbookReader::open(&path).unwrap();
    let summaries = reader.summaries().unwrap();
    assert_eq!(summaries.len(), 2);

    let summary = &summaries[0];
    assert_eq!(summary.row_count, 4);
    assert_eq!(summary.columns[0].axis, AxisRole::X);
    assert_eq!(summary.columns[2].annotation.as_deref(), Some("Cycle 2"));
    assert_eq!(summary.columns[2].value_count, 2);
    assert_eq!(summary.columns[3].length, 2);
    assert!(summary.to_string().contains("cv [CV]: 4 columns, 4 rows"));
}

#[test]
fn test_missing_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Data.corrbook");
    write_workbook(&path);

    let reader = WorkbookReader::open(&path).unwrap();
    assert!(matches!(
        reader.read_dataset("nope"),
        Err(ReaderError::SheetNotFound(_))
    ));
}

#[test]
fn test_rejects_foreign_zip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("other.zip");

    let mut zip_writer = zip::ZipWriter::new(std::fs::File::create(&path).unwrap());
    zip_writer
        .start_file("readme.txt", SimpleFileOptions::default())
        .unwrap();
    zip_writer.write_all(b"hello").unwrap();
    zip_writer.finish().unwrap();

    assert!(matches!(
        WorkbookReader::open(&path),
        Err(ReaderError::InvalidFormat(_))
    ));
}
