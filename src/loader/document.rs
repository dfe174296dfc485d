//! Document type shared by all loaders

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One fully-loaded source text unit
///
/// Holds the complete extracted text of one file (for PDFs, the concatenated
/// page texts) plus the source path for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// The full extracted text
    pub text: String,

    /// Source file the text came from, when known
    pub source: Option<PathBuf>,
}

impl Document {
    /// Create a document from an in-memory text blob with no provenance
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
        }
    }

    /// Create a document loaded from a file
    pub fn with_source(text: impl Into<String>, source: impl AsRef<Path>) -> Self {
        Self {
            text: text.into(),
            source: Some(source.as_ref().to_path_buf()),
        }
    }

    /// Length of the text in characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the document holds no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
