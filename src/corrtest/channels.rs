//! Channel header decoding and row ingestion.

use log::{debug, warn};

use super::error::CorrtestError;

/// Substring marking the first row of a new voltammetry cycle
pub const CYCLE_MARKER: &str = " CYCLE";

/// Column-oriented sample storage keyed by single-letter channel codes.
///
/// Every channel holds exactly one value per ingested row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    /// Channel code and the header position it is read from
    slots: Vec<(char, usize)>,
    /// One series per slot
    series: Vec<Vec<f64>>,
    /// Number of header tokens; rows must carry at least this many values
    width: usize,
    /// Row indices carrying the cycle marker
    cycle_starts: Vec<usize>,
}

/// Channel code of a header name.
///
/// `Current` and `Potential` (any case, optionally followed by a unit such as
/// `Current(A)`) map to `I` and `E`. Every other name uses its upper-cased
/// first letter, so `I(A)` and `E(V)` resolve the same way.
pub fn channel_code(name: &str) -> Option<char> {
    let word = name
        .split(|c: char| !c.is_alphabetic())
        .next()
        .unwrap_or_default();
    if word.eq_ignore_ascii_case("current") {
        return Some('I');
    }
    if word.eq_ignore_ascii_case("potential") {
        return Some('E');
    }
    name.chars().next().and_then(|c| c.to_uppercase().next())
}

impl ChannelTable {
    /// Build an empty table from the channel header line.
    ///
    /// The code of each channel comes from [`channel_code`]. When two names
    /// share a code, the later header column feeds the channel.
    pub fn from_header(header: &str, line_no: usize) -> Result<Self, CorrtestError> {
        let mut slots: Vec<(char, usize)> = Vec::new();
        let mut width = 0;

        for (position, name) in header.split_whitespace().enumerate() {
            width += 1;
            let Some(code) = channel_code(name) else {
                continue;
            };
            match slots.iter_mut().find(|(existing, _)| *existing == code) {
                Some(slot) => {
                    warn!(
                        "Channel '{}' at header position {} shadows an earlier channel with code '{}'",
                        name, position, code
                    );
                    slot.1 = position;
                }
                None => slots.push((code, position)),
            }
        }

        if slots.is_empty() {
            return Err(CorrtestError::EmptyHeader(line_no));
        }

        debug!(
            "Channels: {}",
            slots.iter().map(|(c, _)| *c).collect::<String>()
        );

        Ok(Self {
            series: vec![Vec::new(); slots.len()],
            slots,
            width,
            cycle_starts: Vec::new(),
        })
    }

    /// Ingest one data line.
    ///
    /// Blank lines are skipped and return `Ok(false)`. Values beyond the
    /// header width are ignored.
    pub fn push_row(&mut self, line: &str, line_no: usize) -> Result<bool, CorrtestError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(false);
        }
        if tokens.len() < self.width {
            return Err(CorrtestError::RaggedRow {
                line: line_no,
                expected: self.width,
                found: tokens.len(),
            });
        }

        // Parse the whole row before touching any series so a failure
        // cannot leave channels with unequal lengths.
        let mut row = Vec::with_capacity(self.slots.len());
        for &(_, position) in &self.slots {
            let token = tokens[position];
            let value = token
                .parse::<f64>()
                .map_err(|_| CorrtestError::InvalidNumber {
                    line: line_no,
                    token: token.to_string(),
                })?;
            row.push(value);
        }

        if line.contains(CYCLE_MARKER) {
            self.cycle_starts.push(self.row_count());
        }
        for (series, value) in self.series.iter_mut().zip(row) {
            series.push(value);
        }
        Ok(true)
    }

    /// Series for one channel code
    pub fn channel(&self, code: char) -> Result<&[f64], CorrtestError> {
        self.slots
            .iter()
            .position(|(c, _)| *c == code)
            .map(|idx| self.series[idx].as_slice())
            .ok_or(CorrtestError::MissingChannel(code))
    }

    /// Channel codes in header order
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().map(|(c, _)| *c)
    }

    /// Number of ingested rows
    pub fn row_count(&self) -> usize {
        self.series.first().map(Vec::len).unwrap_or(0)
    }

    /// Row indices where a new cycle starts, in acquisition order
    pub fn cycle_starts(&self) -> &[usize] {
        &self.cycle_starts
    }
}
