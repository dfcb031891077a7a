//! # corrbook Converter
//!
//! A command-line tool for converting Corrtest electrochemical workstation
//! exports into labeled, plot-ready workbooks.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a batch of exports into Data.corrbook next to the first file
//! corrbook convert runs/*.cor
//!
//! # Same batch as a directory of CSV files, skipping broken exports
//! corrbook convert runs/*.cor --format csv --keep-going
//!
//! # Look at one export without writing anything
//! corrbook inspect runs/cv_01.cor
//!
//! # Summarize a saved workbook
//! corrbook info runs/Data.corrbook
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
