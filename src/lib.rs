//! # corrbook - Corrtest Exports as Plot-Ready Workbooks
//!
//! `corrbook` converts the text exports written by Corrtest electrochemical
//! workstations into labeled datasets and stores a batch of them as one
//! workbook.
//!
//! ## Key Features
//!
//! - **Eight Techniques**: chronoamperometry, potential staircase, Tafel,
//!   linear stripping, open circuit, chronopotentiometry, linear sweep and
//!   cyclic voltammetry, each with its own column layout.
//!
//! - **Derived Charge**: current is integrated over time with the cumulative
//!   trapezoidal rule; cyclic voltammetry integrates every cycle on its own.
//!
//! - **Self-Describing Sheets**: every dataset becomes a Parquet file whose
//!   fields carry the long name, axis role and annotation of each column.
//!
//! - **Single-File Workbooks**: sheets are bundled into a `.corrbook` ZIP
//!   container with a JSON manifest; a CSV directory export is also available.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use corrbook::corrtest::parse_file;
//! use corrbook::dataset::{DatasetSink, WorkbookWriter};
//! use corrbook::writer::WriterConfig;
//!
//! let mut sink = WorkbookWriter::new(WriterConfig::default());
//! for name in ["cv_01", "ocp_01"] {
//!     let dataset = parse_file(format!("{}.cor", name))?;
//!     println!("{}", dataset);
//!     sink.submit(name, dataset)?;
//! }
//! let stats = sink.save(Path::new("Data.corrbook"))?;
//! println!("{}", stats);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reading Workbooks
//!
//! Sheets are standard Parquet files stored uncompressed inside the ZIP, so
//! any Parquet tool can read them once extracted:
//!
//! ```python
//! # Python
//! import zipfile, io, pyarrow.parquet as pq
//! with zipfile.ZipFile("Data.corrbook") as z:
//!     df = pq.read_table(io.BytesIO(z.read("sheets/cv_01.parquet"))).to_pandas()
//! ```
//!
//! ## Architecture
//!
//! - [`integrate`]: cumulative trapezoidal integration
//! - [`corrtest`]: export parser and technique dispatch
//! - [`dataset`]: data model and the sinks that persist it
//! - [`schema`]: Arrow schema and container constants
//! - [`writer`]: Parquet sheet writer
//! - [`reader`]: workbook reader
//! - [`report`]: batch conversion report

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod corrtest;
pub mod dataset;
pub mod integrate;
pub mod reader;
pub mod report;
pub mod schema;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::corrtest::{
        parse_file, parse_str, CorrtestError, CorrtestFile, ExperimentParams, Technique,
    };
    pub use crate::dataset::{
        create_sink, AxisRole, Cell, Column, CsvDirectoryWriter, Dataset, DatasetSink,
        OutputMode, SaveStats, SinkError, WorkbookWriter,
    };
    pub use crate::integrate::{integrate, IntegrateError, Step};
    pub use crate::reader::{ReaderError, WorkbookReader};
    pub use crate::writer::{CompressionType, WriterConfig, WriterError};
}
