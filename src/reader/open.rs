use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bytes::Bytes;
use log::{debug, warn};
use zip::ZipArchive;

use super::{ReaderError, WorkbookReader};
use crate::schema::manifest::Manifest;
use crate::schema::{CORRBOOK_FORMAT_VERSION, CORRBOOK_MIMETYPE, MANIFEST_ENTRY};

impl WorkbookReader {
    /// Open a `.corrbook` container
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        // The mimetype entry identifies the container
        {
            let mut first = archive.by_index(0)?;
            let mut mimetype = Vec::new();
            if first.name() == "mimetype" {
                first.read_to_end(&mut mimetype)?;
            }
            if mimetype != CORRBOOK_MIMETYPE.as_bytes() {
                return Err(ReaderError::InvalidFormat(format!(
                    "{} is not a corrbook workbook",
                    path.display()
                )));
            }
        }

        let manifest: Manifest = {
            let mut entry = archive.by_name(MANIFEST_ENTRY).map_err(|_| {
                ReaderError::InvalidFormat(format!("ZIP container missing {}", MANIFEST_ENTRY))
            })?;
            let mut json = String::new();
            entry.read_to_string(&mut json)?;
            serde_json::from_str(&json)?
        };
        if manifest.format_version != CORRBOOK_FORMAT_VERSION {
            warn!(
                "Workbook format version {} differs from supported {}",
                manifest.format_version, CORRBOOK_FORMAT_VERSION
            );
        }

        let mut sheets = HashMap::with_capacity(manifest.sheets.len());
        for entry in &manifest.sheets {
            let mut sheet_file = archive.by_name(&entry.path).map_err(|_| {
                ReaderError::InvalidFormat(format!("ZIP container missing {}", entry.path))
            })?;

            // Read the entire parquet file into memory
            let mut parquet_bytes = Vec::new();
            sheet_file.read_to_end(&mut parquet_bytes)?;
            debug!("Loaded sheet '{}' ({} bytes)", entry.name, parquet_bytes.len());

            sheets.insert(entry.name.clone(), Bytes::from(parquet_bytes));
        }

        Ok(Self {
            path,
            manifest,
            sheets,
        })
    }
}
