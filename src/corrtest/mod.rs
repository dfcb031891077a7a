//! # Corrtest Export Parser
//!
//! Decodes the text exports written by Corrtest electrochemical workstations
//! (`*.cor`) into a labeled [`Dataset`].
//!
//! ## Layout
//!
//! ```text
//! line  5   <label>: ExpType=ID_CV&ScanRate=0.05&Frq=10&...   experiment parameters
//! line 24   Time  E  I  ...                                    channel header
//! line 26+  0.0   -0.2  1.3e-6                                 samples, one row per line
//!           2.1   -0.1  4.0e-6 CYCLE 2                         first row of cycle 2
//! ```
//!
//! Conversion runs in one pass:
//!
//! 1. decode the parameter line into [`ExperimentParams`]
//! 2. map header names to channel codes (`Current` to `I`, `Potential` to `E`,
//!    otherwise the upper-cased first letter)
//! 3. ingest the rows into a [`ChannelTable`]
//! 4. integrate current over time into the charge series `Q`
//! 5. lay out the columns for the technique named by `ExpType`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use corrbook::corrtest::parse_file;
//!
//! let dataset = parse_file("run_01.cor")?;
//! println!("{}", dataset);
//! # Ok::<(), corrbook::corrtest::CorrtestError>(())
//! ```

mod channels;
mod columns;
mod error;
pub mod format;
mod params;
mod technique;


use std::path::Path;

use log::debug;

pub use channels::{channel_code, ChannelTable, CYCLE_MARKER};
pub use columns::{cycle_segments, names};
pub use error::CorrtestError;
pub use params::{
    ExperimentParams, APPLIED_CURRENT, APPLIED_POTENTIAL, DEPOSITION_POTENTIAL, DEPOSITION_TIME,
    EXP_TYPE, FREQUENCY, SCAN_RATE,
};
pub use technique::Technique;

use crate::dataset::Dataset;
use crate::integrate::{integrate, Step};

/// 1-based line holding the experiment parameters
pub const PARAMS_LINE: usize = 5;
/// 1-based line holding the channel header
pub const HEADER_LINE: usize = 24;
/// 1-based line of the first sample row
pub const DATA_START_LINE: usize = 26;

/// Conventional file extension of Corrtest exports
pub const CORRTEST_EXTENSION: &str = "cor";

/// Decoded export before technique dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct CorrtestFile {
    /// Parameters from the metadata line
    pub params: ExperimentParams,
    /// Sample channels
    pub channels: ChannelTable,
    /// Charge `Q`, current integrated over time, aligned with the channels
    pub charge: Vec<f64>,
}

impl CorrtestFile {
    /// Decode export text
    pub fn parse_str(content: &str) -> Result<Self, CorrtestError> {
        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        if lines.len() < HEADER_LINE {
            return Err(CorrtestError::TooShort {
                expected: HEADER_LINE,
                found: lines.len(),
            });
        }

        let params = ExperimentParams::from_line(lines[PARAMS_LINE - 1]);
        debug!("Decoded {} experiment parameters", params.len());

        let mut channels = ChannelTable::from_header(lines[HEADER_LINE - 1], HEADER_LINE)?;
        for (offset, line) in lines.iter().enumerate().skip(DATA_START_LINE - 1) {
            channels.push_row(line, offset + 1)?;
        }
        if channels.row_count() == 0 {
            return Err(CorrtestError::NoSamples(DATA_START_LINE - 1));
        }
        debug!(
            "Read {} rows, {} cycle markers",
            channels.row_count(),
            channels.cycle_starts().len()
        );

        let charge = integrate(
            channels.channel('I')?,
            Step::Abscissa(channels.channel('T')?),
        )?;

        Ok(Self {
            params,
            channels,
            charge,
        })
    }

    /// Technique named by `ExpType`
    pub fn technique(&self) -> Result<Technique, CorrtestError> {
        Technique::from_id(self.params.get(EXP_TYPE)?)
    }

    /// Lay out the technique-specific columns
    pub fn into_dataset(self) -> Result<Dataset, CorrtestError> {
        let technique = self.technique()?;
        let columns = columns::build_columns(technique, &self.params, &self.channels, &self.charge)?;
        debug!("{}: built {} columns", technique, columns.len());

        Ok(Dataset {
            technique,
            params: self.params,
            columns,
        })
    }
}

/// Convert export text into a dataset
pub fn parse_str(content: &str) -> Result<Dataset, CorrtestError> {
    CorrtestFile::parse_str(content)?.into_dataset()
}

/// Read and convert an export file.
///
/// Bytes that are not valid UTF-8 (vendor text in the header block) are
/// replaced rather than rejected; numeric rows are plain ASCII.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Dataset, CorrtestError> {
    let bytes = std::fs::read(path.as_ref())?;
    let content = String::from_utf8_lossy(&bytes);
    parse_str(&content)
}
