//! TOML configuration
//!
//! Every setting is optional and falls back to its default:
//!
//! ```toml
//! # xscdb.toml
//! [codec]
//! compression_level = 9
//!
//! [query]
//! range_padding = 10.0
//! merge_tolerance = 1e-9
//! max_bins = 1000000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{BlobCodec, CodecConfig};
use crate::query::{QueryConfig, RangeQuery};
use crate::resample::Resampler;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct XscConfig {
    /// Blob packing settings
    #[serde(default)]
    pub codec: CodecConfig,

    /// Range query and resampling settings
    #[serde(default)]
    pub query: QueryConfig,
}

impl XscConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// A codec built from these settings
    pub fn codec(&self) -> BlobCodec {
        BlobCodec::new(self.codec)
    }

    /// A range query engine built from these settings
    pub fn range_query(&self) -> RangeQuery {
        RangeQuery::new(self.query)
    }

    /// A resampler built from these settings
    pub fn resampler(&self) -> Resampler {
        Resampler::new(self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [codec]
            compression_level = 9

            [query]
            range_padding = 2.5
            merge_tolerance = 1e-6
        "#;

        let config = XscConfig::from_str(toml).unwrap();
        assert_eq!(config.codec.compression_level, 9);
        assert_eq!(config.query.range_padding, 2.5);
        assert_eq!(config.query.merge_tolerance, 1e-6);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [query]
            range_padding = 0.0
        "#;

        let config = XscConfig::from_str(toml).unwrap();
        assert_eq!(config.query.range_padding, 0.0);
        assert_eq!(config.query.merge_tolerance, 1e-9);
        assert_eq!(config.query.max_bins, 1_000_000);
        assert_eq!(config.codec, CodecConfig::default());
    }

    #[test]
    fn test_empty_config() {
        let config = XscConfig::from_str("").unwrap();
        assert_eq!(config, XscConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = XscConfig::from_str("[codec]\ncompression_level = \"high\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xscdb.toml");
        std::fs::write(&path, "[codec]\ncompression_level = 1\n").unwrap();

        let config = XscConfig::from_file(&path).unwrap();
        assert_eq!(*config.codec().config(), CodecConfig::fast());
    }

    #[test]
    fn test_missing_file() {
        let result = XscConfig::from_file(Path::new("/nonexistent/xscdb.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
