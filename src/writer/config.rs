use std::collections::HashMap;

use parquet::basic::{Compression, Encoding, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

/// Compression options for workbook sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// ZSTD compression (recommended, best compression ratio)
    Zstd(i32),
    /// Snappy compression (faster, slightly larger files)
    Snappy,
    /// No compression (fastest write, largest files)
    Uncompressed,
}

impl Default for CompressionType {
    fn default() -> Self {
        Self::Zstd(3)
    }
}

/// Configuration for the sheet writer
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression type to use
    pub compression: CompressionType,

    /// Target row group size (number of rows per group)
    pub row_group_size: usize,

    /// Data page size in bytes
    pub data_page_size: usize,

    /// Whether to write statistics for columns
    pub write_statistics: bool,

    /// Enable BYTE_STREAM_SPLIT encoding for the float columns.
    /// Sampled potentials and currents vary smoothly, which this encoding
    /// compresses well.
    pub use_byte_stream_split: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionType::default(),
            // Instrument runs rarely exceed a few hundred thousand samples
            row_group_size: 100_000,
            // 1MB data pages
            data_page_size: 1024 * 1024,
            write_statistics: true,
            use_byte_stream_split: true,
        }
    }
}

impl WriterConfig {
    /// Configuration with the given ZSTD level and default everything else
    pub fn with_zstd_level(level: i32) -> Self {
        Self {
            compression: CompressionType::Zstd(level),
            ..Self::default()
        }
    }

    /// Create writer properties from this configuration
    pub(super) fn to_writer_properties(&self, metadata: &HashMap<String, String>) -> WriterProperties {
        let compression = match self.compression {
            CompressionType::Zstd(level) => {
                Compression::ZSTD(ZstdLevel::try_new(level).unwrap_or_default())
            }
            CompressionType::Snappy => Compression::SNAPPY,
            CompressionType::Uncompressed => Compression::UNCOMPRESSED,
        };

        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        // Sample values are high-cardinality; dictionaries only add overhead
        let mut builder = WriterProperties::builder()
            .set_compression(compression)
            .set_data_page_size_limit(self.data_page_size)
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(self.row_group_size)
            .set_dictionary_enabled(false);

        if self.use_byte_stream_split {
            builder = builder.set_encoding(Encoding::BYTE_STREAM_SPLIT);
        }

        // Deterministic footer order
        let mut keys: Vec<&String> = metadata.keys().collect();
        keys.sort();
        let kv_metadata: Vec<KeyValue> = keys
            .into_iter()
            .map(|k| KeyValue {
                key: k.clone(),
                value: Some(metadata[k].clone()),
            })
            .collect();

        builder = builder.set_key_value_metadata(Some(kv_metadata));

        builder.build()
    }
}
