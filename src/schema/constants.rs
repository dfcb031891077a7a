/// corrbook workbook format version - follows semantic versioning
pub const CORRBOOK_FORMAT_VERSION: &str = "1.0.0";

/// File extension of workbook containers (without the dot)
pub const CORRBOOK_EXTENSION: &str = "corrbook";

/// MIME type stored as the first container entry
pub const CORRBOOK_MIMETYPE: &str = "application/vnd.corrbook";

/// Container entry holding the manifest
pub const MANIFEST_ENTRY: &str = "manifest.json";

/// Container directory holding the sheets
pub const SHEETS_DIR: &str = "sheets";

/// Field metadata key: column long name
pub const FIELD_LONG_NAME: &str = "corrbook:long_name";

/// Field metadata key: axis role
pub const FIELD_AXIS: &str = "corrbook:axis";

/// Field metadata key: annotation text
pub const FIELD_ANNOTATION: &str = "corrbook:annotation";

/// Field metadata key: column length before tail padding
pub const FIELD_LENGTH: &str = "corrbook:length";

/// Parquet footer key: format version
pub const KEY_FORMAT_VERSION: &str = "corrbook:format_version";

/// Parquet footer key: sheet name
pub const KEY_SHEET_NAME: &str = "corrbook:sheet_name";

/// Parquet footer key: technique identifier
pub const KEY_TECHNIQUE: &str = "corrbook:technique";

/// Parquet footer key: experiment parameters as JSON
pub const KEY_EXPERIMENT_PARAMS: &str = "corrbook:experiment_params";
