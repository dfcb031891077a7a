use std::collections::HashSet;

use log::warn;

use super::types::Dataset;

/// Name used when a sheet name sanitizes to nothing
pub const DEFAULT_SHEET_NAME: &str = "Sheet";

/// A dataset stored under a unique name
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Unique sheet name
    pub name: String,
    /// Sheet content
    pub dataset: Dataset,
}

/// Ordered, uniquely named collection of datasets waiting to be saved.
///
/// Names are unique ignoring ASCII case so that CSV output stays distinct
/// on case-insensitive file systems.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
    taken: HashSet<String>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dataset` under `name` and return the name actually used.
    ///
    /// `name` is sanitized with [`sanitize_sheet_name`]; collisions get a
    /// `_2`, `_3`, ... suffix.
    pub fn add(&mut self, name: &str, dataset: Dataset) -> String {
        let base = sanitize_sheet_name(name);
        let mut candidate = base.clone();
        let mut counter = 2;
        while self.taken.contains(&candidate.to_ascii_lowercase()) {
            candidate = format!("{}_{}", base, counter);
            counter += 1;
        }
        if candidate != name {
            warn!("Sheet '{}' stored as '{}'", name, candidate);
        }

        self.taken.insert(candidate.to_ascii_lowercase());
        self.sheets.push(Sheet {
            name: candidate.clone(),
            dataset,
        });
        candidate
    }

    /// Sheets in submission order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Look up a sheet by name
    pub fn get(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Whether no sheet was added yet
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

/// Make `name` safe as a file name and container entry.
///
/// Characters outside `[A-Za-z0-9 ._-]` become `_`; surrounding whitespace
/// and dots are dropped.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
