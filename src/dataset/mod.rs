//! # Dataset Module
//!
//! The converted data model ([`Dataset`], [`Column`], [`Cell`]) and the
//! sinks that persist it.
//!
//! Conversion produces one [`Dataset`] per export file. Datasets are
//! submitted to a [`DatasetSink`], which assigns each a unique sheet name
//! and writes all of them on [`DatasetSink::save`]:
//!
//! - [`WorkbookWriter`]: single `.corrbook` ZIP container (default)
//! - [`CsvDirectoryWriter`]: directory with one CSV file per sheet
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use corrbook::corrtest::parse_file;
//! use corrbook::dataset::{DatasetSink, WorkbookWriter};
//! use corrbook::writer::WriterConfig;
//!
//! let mut sink = WorkbookWriter::new(WriterConfig::default());
//! sink.submit("run_01", parse_file("run_01.cor")?)?;
//! let stats = sink.save(Path::new("Data.corrbook"))?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod csv_writer;
mod error;
mod sink;
mod stats;
mod types;
mod workbook;
mod writer_impl;


pub use csv_writer::{write_csv, CsvDirectoryWriter, CSV_EXTENSION};
pub use error::SinkError;
pub use sink::{create_sink, DatasetSink};
pub use stats::SaveStats;
pub use types::{AxisRole, Cell, Column, Dataset, OutputMode};
pub use workbook::{sanitize_sheet_name, Sheet, Workbook, DEFAULT_SHEET_NAME};
pub use writer_impl::WorkbookWriter;
