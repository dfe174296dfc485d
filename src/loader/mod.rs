//! Document loading for docsplit-rs
//!
//! This module discovers source files (a single file or a recursive directory
//! tree), extracts their textual content, and produces ordered document
//! collections for downstream splitting.

pub mod document;
pub mod pdf;
pub mod text;

// Re-export main types
pub use document::Document;
pub use pdf::{LopdfTextExtractor, PdfFileLoader, PdfTextExtractor};
pub use text::TextFileLoader;

use crate::error::Result;

/// Kind of filesystem source a loader was pointed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A single file matching the loader's extension
    File,

    /// A directory tree walked recursively for matching files
    Directory,
}

/// Common capability implemented by every document loader.
///
/// A path that is neither a directory nor a file carrying the loader's
/// extension fails validation; loaders never silently no-op on bad input.
pub trait DocumentLoader {
    /// Classify the configured path without reading any file contents
    fn validate(&self) -> Result<SourceKind>;

    /// Read every matching source and return a fresh document collection.
    ///
    /// Each call re-reads the filesystem and returns a new collection;
    /// loaders hold no document state between calls.
    fn load_documents(&self) -> Result<Vec<Document>>;
}
