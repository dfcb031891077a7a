use crate::integrate::IntegrateError;

/// Errors that can occur while converting a Corrtest export
#[derive(Debug, thiserror::Error)]
pub enum CorrtestError {
    /// I/O error reading the export file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File ends before one of the fixed layout lines
    #[error("File too short: expected at least {expected} lines, found {found}")]
    TooShort {
        /// Minimum number of lines required by the layout
        expected: usize,
        /// Number of lines actually present
        found: usize,
    },

    /// Channel header line holds no channel names
    #[error("Empty channel header on line {0}")]
    EmptyHeader(usize),

    /// Data block holds no samples
    #[error("No data rows after line {0}")]
    NoSamples(usize),

    /// Data row carries fewer values than declared channels
    #[error("Line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        /// 1-based line number in the export
        line: usize,
        /// Declared channel count
        expected: usize,
        /// Tokens present on the row
        found: usize,
    },

    /// Data token is not a floating-point number
    #[error("Line {line}: '{token}' is not a number")]
    InvalidNumber {
        /// 1-based line number in the export
        line: usize,
        /// Offending token
        token: String,
    },

    /// A channel required by the conversion is absent from the header
    #[error("Missing channel '{0}'")]
    MissingChannel(char),

    /// A parameter required by the technique is absent from the metadata line
    #[error("Missing experiment parameter '{0}'")]
    MissingParameter(String),

    /// A numeric parameter could not be parsed
    #[error("Invalid value '{value}' for experiment parameter '{key}'")]
    InvalidParameter {
        /// Parameter name
        key: String,
        /// Raw value
        value: String,
    },

    /// `ExpType` is not one of the supported techniques
    #[error("Unknown technique identifier '{0}'")]
    UnknownTechnique(String),

    /// No sample reaches the declared deposition time
    #[error("Deposition time {deposition_time} s exceeds the recorded range (last sample at {last_time} s)")]
    DepositionOutOfRange {
        /// Declared `DepositionTime`
        deposition_time: f64,
        /// Last recorded time, NaN when there are no samples
        last_time: f64,
    },

    /// Charge integration failed
    #[error("Integration error: {0}")]
    IntegrateError(#[from] IntegrateError),
}
