//! Experiment parameters from the export's metadata line.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::CorrtestError;

/// Parameter naming the technique
pub const EXP_TYPE: &str = "ExpType";
/// Applied potential of potentiostatic runs (V)
pub const APPLIED_POTENTIAL: &str = "AppliedPotential";
/// Applied current of galvanostatic runs (A)
pub const APPLIED_CURRENT: &str = "PorCurr";
/// Potential scan rate
pub const SCAN_RATE: &str = "ScanRate";
/// Deposition duration of stripping runs (s)
pub const DEPOSITION_TIME: &str = "DepositionTime";
/// Deposition potential of stripping runs (V)
pub const DEPOSITION_POTENTIAL: &str = "DepositionE";
/// Acquisition frequency (Hz)
pub const FREQUENCY: &str = "Frq";

/// Key/value parameters decoded from the metadata line.
///
/// Values stay as the instrument wrote them; accessors fail with
/// [`CorrtestError::MissingParameter`] instead of returning defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentParams {
    values: BTreeMap<String, String>,
}

impl ExperimentParams {
    /// Decode a metadata line.
    ///
    /// Everything after the first `:` is treated as a form-urlencoded query
    /// string. Pairs with an empty value are dropped and a repeated key keeps
    /// its last value.
    pub fn from_line(line: &str) -> Self {
        let query = match line.split_once(':') {
            Some((_, rest)) => rest,
            None => line,
        };

        let mut values = BTreeMap::new();
        for (key, value) in url::form_urlencoded::parse(query.trim().as_bytes()) {
            if value.is_empty() {
                continue;
            }
            values.insert(key.into_owned(), value.into_owned());
        }
        Self { values }
    }

    /// Raw value of a required parameter
    pub fn get(&self, key: &str) -> Result<&str, CorrtestError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| CorrtestError::MissingParameter(key.to_string()))
    }

    /// Required parameter parsed as `f64`
    pub fn get_f64(&self, key: &str) -> Result<f64, CorrtestError> {
        let raw = self.get(key)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| CorrtestError::InvalidParameter {
                key: key.to_string(),
                value: raw.to_string(),
            })
    }

    /// Optional lookup
    pub fn find(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were decoded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_after_label() {
        let params = ExperimentParams::from_line("Parameters: ExpType=ID_CV&ScanRate=0.05&Frq=10");
        assert_eq!(params.get(EXP_TYPE).unwrap(), "ID_CV");
        assert_eq!(params.get_f64(SCAN_RATE).unwrap(), 0.05);
        assert_eq!(params.get_f64(FREQUENCY).unwrap(), 10.0);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_from_line_without_label() {
        let params = ExperimentParams::from_line("ExpType=ID_OCP");
        assert_eq!(params.get(EXP_TYPE).unwrap(), "ID_OCP");
    }

    #[test]
    fn test_percent_and_plus_decoding() {
        let params = ExperimentParams::from_line("x: Note=two+words&Path=a%2Fb");
        assert_eq!(params.find("Note"), Some("two words"));
        assert_eq!(params.find("Path"), Some("a/b"));
    }

    #[test]
    fn test_last_key_wins_and_blanks_dropped() {
        let params = ExperimentParams::from_line("x: A=1&A=2&B=&C");
        assert_eq!(params.find("A"), Some("2"));
        assert_eq!(params.find("B"), None);
        assert_eq!(params.find("C"), None);
    }

    #[test]
    fn test_missing_and_invalid() {
        let params = ExperimentParams::from_line("x: Frq=fast");
        assert!(matches!(
            params.get(SCAN_RATE),
            Err(CorrtestError::MissingParameter(k)) if k == SCAN_RATE
        ));
        assert!(matches!(
            params.get_f64(FREQUENCY),
            Err(CorrtestError::InvalidParameter { .. })
        ));
    }
}
