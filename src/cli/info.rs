use anyhow::{Context, Result};
use std::path::PathBuf;

use corrbook::reader::WorkbookReader;

/// Display information about a .corrbook workbook
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let reader = WorkbookReader::open(&file).context("Failed to open workbook")?;
    let manifest = reader.manifest();

    println!("corrbook Workbook Information");
    println!("=============================");
    println!("File: {}", file.display());
    println!("Format version: {}", manifest.format_version);
    println!("Workbook id: {}", manifest.workbook_id);
    println!("Created: {}", manifest.created);
    println!("Converter: {}", manifest.converter);
    println!("Sheets: {}", manifest.sheets.len());
    println!();

    let summaries = reader.summaries().context("Failed to read sheets")?;
    for (entry, summary) in manifest.sheets.iter().zip(&summaries) {
        print!("{}", summary);
        let params: Vec<String> = entry
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        if !params.is_empty() {
            println!("  params: {}", params.join(" "));
        }
        println!();
    }

    Ok(())
}
