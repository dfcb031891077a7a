//! Per-file outcome report of a batch conversion.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of converting one input file
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Converted and stored under `sheet`
    Converted {
        /// Sheet name assigned by the sink
        sheet: String,
        /// Technique display name
        technique: String,
        /// Number of columns produced
        columns: usize,
        /// Number of rows produced
        rows: usize,
    },
    /// Conversion failed
    Failed(String),
}

impl FileStatus {
    fn is_ok(&self) -> bool {
        matches!(self, FileStatus::Converted { .. })
    }
}

/// One input file in the report
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Input path as given
    pub path: String,
    /// What happened to it
    pub status: FileStatus,
}

/// Report of a conversion batch
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Outcomes in input order
    pub files: Vec<FileOutcome>,
    /// Output path, once saved
    pub output: Option<String>,
}

impl ConversionReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a converted file
    pub fn converted(
        &mut self,
        path: impl Into<String>,
        sheet: impl Into<String>,
        technique: impl Into<String>,
        columns: usize,
        rows: usize,
    ) {
        self.files.push(FileOutcome {
            path: path.into(),
            status: FileStatus::Converted {
                sheet: sheet.into(),
                technique: technique.into(),
                columns,
                rows,
            },
        });
    }

    /// Record a failed file
    pub fn failed(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.files.push(FileOutcome {
            path: path.into(),
            status: FileStatus::Failed(message.into()),
        });
    }

    /// Number of converted files
    pub fn success_count(&self) -> usize {
        self.files.iter().filter(|f| f.status.is_ok()).count()
    }

    /// Number of failed files
    pub fn failure_count(&self) -> usize {
        self.files.len() - self.success_count()
    }

    /// Whether any file failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = String::new();
            output.push_str(&format!("{}\n", style("Conversion Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("=================").cyan()));

            for file in &self.files {
                match &file.status {
                    FileStatus::Converted {
                        sheet,
                        technique,
                        columns,
                        rows,
                    } => output.push_str(&format!(
                        "[{}] {} -> {} ({}, {} columns, {} rows)\n",
                        OK,
                        style(&file.path).green(),
                        sheet,
                        technique,
                        columns,
                        rows
                    )),
                    FileStatus::Failed(msg) => output.push_str(&format!(
                        "[{}] {} - {}: {}\n",
                        FAIL,
                        style(&file.path).red(),
                        style("FAILED").red().bold(),
                        msg
                    )),
                }
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} converted, {} failed\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.failure_count()).red()
            ));
            if let Some(path) = &self.output {
                output.push_str(&format!("{}: {}\n", style("Output").bold(), path));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Report")?;
        writeln!(f, "=================")?;

        for file in &self.files {
            match &file.status {
                FileStatus::Converted {
                    sheet,
                    technique,
                    columns,
                    rows,
                } => writeln!(
                    f,
                    "[✓] {} -> {} ({}, {} columns, {} rows)",
                    file.path, sheet, technique, columns, rows
                )?,
                FileStatus::Failed(msg) => writeln!(f, "[✗] {} - FAILED: {}", file.path, msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} converted, {} failed",
            self.success_count(),
            self.failure_count()
        )?;
        if let Some(path) = &self.output {
            writeln!(f, "Output: {}", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = ConversionReport::new();
        report.converted("a.cor", "a", "CV", 5, 100);
        report.failed("b.cor", "Unknown technique: ID_XYZ");
        report.converted("c.cor", "c", "OCV", 3, 10);

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn test_display() {
        let mut report = ConversionReport::new();
        report.converted("a.cor", "a", "CV", 5, 100);
        report.failed("b.cor", "too short");
        report.output = Some("Data.corrbook".to_string());

        let text = report.to_string();
        assert!(text.contains("[✓] a.cor -> a (CV, 5 columns, 100 rows)"));
        assert!(text.contains("[✗] b.cor - FAILED: too short"));
        assert!(text.contains("Summary: 1 converted, 1 failed"));
        assert!(text.contains("Output: Data.corrbook"));
    }

    #[test]
    fn test_empty_report() {
        let report = ConversionReport::new();
        assert!(!report.has_failures());
        assert!(report.format_colored().contains("Conversion Report"));
    }
}
