//! Configuration types for docsplit-rs
//!
//! This module defines the loader and splitter settings, their defaults,
//! and construction-time validation.

use crate::error::{DocsplitError, Result};
use serde::{Deserialize, Serialize};

/// Default chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default number of characters shared between adjacent chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Default text encoding label
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Top-level configuration for loading and splitting
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Document loader settings
    pub loader: LoaderConfig,

    /// Text splitter settings
    pub splitter: SplitterConfig,
}

/// Settings for the text file loader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Encoding label used to decode text files (any label encoding_rs resolves)
    pub encoding: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Settings for the character text splitter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitterConfig {
    /// Chunk size in characters
    pub chunk_size: usize,

    /// Characters shared between adjacent chunks of the same document
    pub chunk_overlap: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl Config {
    /// Validate the configuration, rejecting parameter combinations the
    /// loaders and splitter cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.splitter.chunk_size == 0 {
            return Err(DocsplitError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }

        if self.splitter.chunk_size <= self.splitter.chunk_overlap {
            return Err(DocsplitError::InvalidConfig(format!(
                "chunk_size ({}) must be greater than chunk_overlap ({})",
                self.splitter.chunk_size, self.splitter.chunk_overlap
            )));
        }

        if encoding_rs::Encoding::for_label(self.loader.encoding.as_bytes()).is_none() {
            return Err(DocsplitError::InvalidConfig(format!(
                "unknown encoding label: {}",
                self.loader.encoding
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.splitter.chunk_size, 1000);
        assert_eq!(config.splitter.chunk_overlap, 200);
        assert_eq!(config.loader.encoding, "utf-8");
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        let mut config = Config::default();
        config.splitter.chunk_size = 100;
        config.splitter.chunk_overlap = 100;
        assert!(matches!(
            config.validate(),
            Err(DocsplitError::InvalidConfig(_))
        ));

        config.splitter.chunk_overlap = 200;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = Config::default();
        config.splitter.chunk_size = 0;
        config.splitter.chunk_overlap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let mut config = Config::default();
        config.loader.encoding = "not-a-real-encoding".to_string();
        assert!(matches!(
            config.validate(),
            Err(DocsplitError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
