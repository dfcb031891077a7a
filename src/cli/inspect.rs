use anyhow::{Context, Result};
use std::path::PathBuf;

use corrbook::corrtest::parse_file;

/// Parse one export file and print its column layout
pub fn run(input: PathBuf) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let dataset = parse_file(&input)
        .with_context(|| format!("Failed to parse {}", input.display()))?;

    println!("Corrtest Export");
    println!("===============");
    println!("File: {}", input.display());
    println!();

    println!("Parameters:");
    for (key, value) in dataset.params.iter() {
        println!("  {}: {}", key, value);
    }
    println!();

    print!("{}", dataset);

    Ok(())
}
