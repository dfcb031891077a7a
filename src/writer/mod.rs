//! # Sheet Writer Module
//!
//! Writes one [`Dataset`](crate::dataset::Dataset) as a self-contained
//! Parquet file ("sheet").
//!
//! ## Design Principles
//!
//! 1. **Self-Contained Sheets**: sheet name, technique and experiment
//!    parameters are embedded in the Parquet footer's key_value_metadata.
//!
//! 2. **Labels in the Schema**: long names, axis roles and annotations are
//!    Arrow field metadata (see [`crate::schema`]).
//!
//! 3. **Configurable Compression**: Supports ZSTD (default), Snappy, and uncompressed.

mod config;
mod error;
mod sheet_writer;
mod stats;

pub use config::{CompressionType, WriterConfig};
pub use error::WriterError;
pub use sheet_writer::write_sheet;
pub use stats::SheetStats;
