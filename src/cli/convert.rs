use anyhow::{Context, Result};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use corrbook::corrtest::parse_file;
use corrbook::dataset::{create_sink, OutputMode, CSV_EXTENSION};
use corrbook::report::ConversionReport;
use corrbook::schema::CORRBOOK_EXTENSION;
use corrbook::writer::WriterConfig;

use super::config::Config;
use super::FormatArg;

/// Base name of the default output
const DEFAULT_OUTPUT_STEM: &str = "Data";

/// Default output next to the first input
fn default_output(first_input: &Path, mode: OutputMode) -> PathBuf {
    match mode {
        OutputMode::Container => {
            first_input.with_file_name(format!("{}.{}", DEFAULT_OUTPUT_STEM, CORRBOOK_EXTENSION))
        }
        OutputMode::CsvDirectory => first_input.with_file_name(DEFAULT_OUTPUT_STEM),
    }
}

/// Convert a batch of Corrtest exports into one workbook
pub fn run(
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
    config_path: Option<PathBuf>,
    keep_going: bool,
    compression_level: Option<i32>,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // CLI flags win over the config file
    let mode = OutputMode::from(format.or(config.conversion.format).unwrap_or_default());
    let compression_level = compression_level
        .or(config.conversion.compression_level)
        .unwrap_or(3);
    let keep_going = keep_going || config.conversion.keep_going.unwrap_or(false);

    let first_input = inputs
        .first()
        .context("At least one input file is required")?;
    let output = output.unwrap_or_else(|| default_output(first_input, mode));
    if output.exists() {
        anyhow::bail!("Output already exists: {}", output.display());
    }

    info!("corrbook Converter - Corrtest to workbook");
    info!("=========================================");
    info!("Inputs: {} files", inputs.len());
    info!("Output: {}", output.display());
    match mode {
        OutputMode::Container => info!("Format: Container .{}", CORRBOOK_EXTENSION),
        OutputMode::CsvDirectory => info!("Format: Directory of .{} files", CSV_EXTENSION),
    }
    info!("Compression level: {}", compression_level);
    if keep_going {
        info!("Failed files will be skipped");
    }

    let mut sink = create_sink(mode, WriterConfig::with_zstd_level(compression_level));
    let mut report = ConversionReport::new();
    let batch_start = Instant::now();

    for input in &inputs {
        let start = Instant::now();
        let label = input.display().to_string();

        let dataset = match parse_file(input) {
            Ok(dataset) => dataset,
            Err(e) => {
                report.failed(label.as_str(), e.to_string());
                if keep_going {
                    warn!("Skipping {}: {}", label, e);
                    continue;
                }
                error!("Aborting batch, nothing was saved");
                println!("{}", report.format_colored());
                return Err(e).with_context(|| format!("Failed to convert {}", label));
            }
        };

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let technique = dataset.display_name();
        let columns = dataset.column_count();
        let rows = dataset.row_count();

        let sheet = sink
            .submit(&stem, dataset)
            .with_context(|| format!("Failed to queue {}", label))?;
        info!(
            "Converted {} -> '{}' ({}, {} columns, {} rows) in {:.2?}",
            label,
            sheet,
            technique,
            columns,
            rows,
            start.elapsed()
        );
        report.converted(label, sheet, technique, columns, rows);
    }

    if sink.is_empty() {
        println!("{}", report.format_colored());
        anyhow::bail!("No file could be converted; nothing was saved");
    }

    let stats = sink
        .save(&output)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    report.output = Some(output.display().to_string());

    info!("Conversion complete in {:.2?}", batch_start.elapsed());
    info!("  Sheets written: {}", stats.sheets_written);
    info!("  Values written: {}", stats.values_written);
    info!(
        "  Output size: {} bytes ({:.2} MB)",
        stats.total_size_bytes,
        stats.total_size_bytes as f64 / 1024.0 / 1024.0
    );

    println!("{}", report.format_colored());
    if report.has_failures() {
        warn!(
            "{} of {} files failed to convert",
            report.failure_count(),
            report.files.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        let first = Path::new("/data/runs/a.cor");
        assert_eq!(
            default_output(first, OutputMode::Container),
            PathBuf::from("/data/runs/Data.corrbook")
        );
        assert_eq!(
            default_output(first, OutputMode::CsvDirectory),
            PathBuf::from("/data/runs/Data")
        );
    }
}
