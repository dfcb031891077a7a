//! TOML configuration file support for batch runs.
//!
//! Instead of repeating CLI flags, settings can live in a config file:
//!
//! ```toml
//! # corrbook.toml
//! [conversion]
//! format = "csv"
//! compression_level = 9
//! keep_going = true
//! ```
//!
//! Flags given on the command line win over file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::FormatArg;

/// Root configuration structure for corrbook.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,
}

/// Configuration for the convert command.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionConfig {
    /// Output format (`container` or `csv`).
    pub format: Option<FormatArg>,

    /// ZSTD compression level (1-22).
    pub compression_level: Option<i32>,

    /// Skip files that fail to convert.
    pub keep_going: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [conversion]
            format = "csv"
            compression_level = 15
            keep_going = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.format, Some(FormatArg::Csv));
        assert_eq!(config.conversion.compression_level, Some(15));
        assert_eq!(config.conversion.keep_going, Some(true));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [conversion]
            compression_level = 10
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.conversion.compression_level, Some(10));
        assert_eq!(config.conversion.format, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.conversion.keep_going, None);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Config::from_str("[conversion]\nformat = \"xlsx\"\n").is_err());
    }
}
