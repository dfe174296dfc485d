//! Error types for docsplit-rs
//!
//! This module provides comprehensive error handling for all document loading,
//! decoding, PDF extraction, and text splitting operations.

use thiserror::Error;

/// Main error type for docsplit operations
#[derive(Error, Debug)]
pub enum DocsplitError {
    /// Path is neither a qualifying file nor a directory
    #[error("Invalid input path: {0}")]
    InvalidInput(String),

    /// File bytes cannot be decoded with the configured encoding
    #[error("Decode error: {0}")]
    Decode(String),

    /// Loader or splitter constructed with unusable parameters
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// PDF text extraction failed on a matching file
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for docsplit operations
pub type Result<T> = std::result::Result<T, DocsplitError>;

// Implement From traits for external error types
impl From<walkdir::Error> for DocsplitError {
    fn from(err: walkdir::Error) -> Self {
        DocsplitError::Io(err.into())
    }
}

impl From<lopdf::Error> for DocsplitError {
    fn from(err: lopdf::Error) -> Self {
        DocsplitError::Extraction(err.to_string())
    }
}
