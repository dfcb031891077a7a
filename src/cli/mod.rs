use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

use corrbook::dataset::OutputMode;

mod config;
mod convert;
mod info;
mod inspect;

/// corrbook - Corrtest electrochemistry export converter
#[derive(Parser)]
#[command(name = "corrbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output layout of a converted batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatArg {
    /// Single .corrbook container (one Parquet sheet per file)
    #[default]
    Container,
    /// Directory with one CSV file per input
    Csv,
}

impl From<FormatArg> for OutputMode {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Container => OutputMode::Container,
            FormatArg::Csv => OutputMode::CsvDirectory,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Corrtest export files into one workbook
    Convert {
        /// Input export files (*.cor)
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output path (defaults to Data.corrbook next to the first input)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format (container, csv)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip files that fail to convert instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Compression level for ZSTD (1-22, default: 3)
        #[arg(short = 'c', long)]
        compression_level: Option<i32>,
    },

    /// Parse one export file and print its columns without writing
    Inspect {
        /// Input export file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Display information about a .corrbook workbook
    Info {
        /// Workbook file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            inputs,
            output,
            format,
            config,
            keep_going,
            compression_level,
        } => convert::run(
            inputs,
            output,
            format,
            config,
            keep_going,
            compression_level,
        ),
        Commands::Inspect { input } => inspect::run(input),
        Commands::Info { file } => info::run(file),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_args() {
        let cli = Cli::try_parse_from([
            "corrbook",
            "-vv",
            "convert",
            "a.cor",
            "b.cor",
            "--format",
            "csv",
            "-c",
            "9",
            "--keep-going",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);

        match cli.command {
            Commands::Convert {
                inputs,
                output,
                format,
                keep_going,
                compression_level,
                ..
            } => {
                assert_eq!(inputs.len(), 2);
                assert!(output.is_none());
                assert_eq!(format, Some(FormatArg::Csv));
                assert!(keep_going);
                assert_eq!(compression_level, Some(9));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_requires_input() {
        assert!(Cli::try_parse_from(["corrbook", "convert"]).is_err());
    }

    #[test]
    fn test_format_to_output_mode() {
        assert_eq!(OutputMode::from(FormatArg::Container), OutputMode::Container);
        assert_eq!(OutputMode::from(FormatArg::Csv), OutputMode::CsvDirectory);
    }
}
