use arrow::array::{Array, Float64Array};

use super::*;
use crate::corrtest::{ExperimentParams, Technique};
use crate::dataset::{Column, Dataset};

fn stripping_like() -> Dataset {
    Dataset {
        technique: Technique::LinearStripping,
        params: ExperimentParams::default(),
        columns: vec![
            Column::new("time, s", [0.0, 1.0, 2.0]).as_x(),
            Column::new("I, A", [1.0]).with_annotation("Deposition"),
            Column::padded("I, A", 1, &[2.0], 3),
        ],
    }
}

#[test]
fn test_field_metadata() {
    let schema = create_sheet_schema(&stripping_like());

    let time = schema.field(0);
    assert!(time.is_nullable());
    assert_eq!(time.metadata().get(FIELD_AXIS).map(String::as_str), Some("X"));
    assert_eq!(time.metadata().get(FIELD_LONG_NAME).map(String::as_str), Some("time, s"));
    assert!(time.metadata().get(FIELD_ANNOTATION).is_none());

    let deposition = schema.field(1);
    assert_eq!(deposition.name(), "02 I, A");
    assert_eq!(deposition.metadata().get(FIELD_AXIS).map(String::as_str), Some("Y"));
    assert_eq!(
        deposition.metadata().get(FIELD_ANNOTATION).map(String::as_str),
        Some("Deposition")
    );
    assert_eq!(deposition.metadata().get(FIELD_LENGTH).map(String::as_str), Some("1"));

    assert_eq!(
        schema.metadata().get(KEY_FORMAT_VERSION).map(String::as_str),
        Some(CORRBOOK_FORMAT_VERSION)
    );
}

#[test]
fn test_field_names_are_unique() {
    let schema = create_sheet_schema(&stripping_like());
    let names: std::collections::HashSet<&String> =
        schema.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names.len(), 3);
}

#[test]
fn test_arrays_padded_with_nulls() {
    let arrays = sheet_arrays(&stripping_like());
    assert!(arrays.iter().all(|a| a.len() == 3));

    let deposition = arrays[1].as_any().downcast_ref::<Float64Array>().unwrap();
    assert_eq!(deposition.value(0), 1.0);
    assert!(deposition.is_null(1));
    assert!(deposition.is_null(2));

    let stripping = arrays[2].as_any().downcast_ref::<Float64Array>().unwrap();
    assert!(stripping.is_null(0));
    assert_eq!(stripping.value(1), 2.0);
    assert_eq!(stripping.null_count(), 2);
}
