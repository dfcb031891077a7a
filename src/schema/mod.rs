//! # Workbook Sheet Schema
//!
//! Every dataset is stored as one Parquet file ("sheet") in a "Wide" layout:
//! one nullable `Float64` column per dataset column, one row per sample.
//! Columns shorter than the longest one are padded with nulls at the tail,
//! and padding inside per-cycle columns is also stored as null.
//!
//! Column labels live in Arrow field metadata so a sheet can be rebuilt
//! without the manifest:
//!
//! | Field key | Content |
//! |-----------|---------|
//! | `corrbook:long_name` | Column name with units, e.g. `I, A` |
//! | `corrbook:axis` | `X` or `Y` |
//! | `corrbook:annotation` | Comment text (absent when none) |
//! | `corrbook:length` | Column length before tail padding |
//!
//! Field names are positional (`01 time, s`, `02 I, A`, ...) because long
//! names repeat within a sheet.

mod builders;
mod constants;
pub mod manifest;

#[cfg(test)]
mod tests;

pub use builders::{create_sheet_schema, create_sheet_schema_arc, field_name, sheet_arrays};
pub use constants::*;
