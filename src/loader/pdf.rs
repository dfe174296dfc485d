//! PDF document loading
//!
//! The loader owns file discovery and page-text concatenation; the actual
//! parsing is delegated to a [`PdfTextExtractor`] collaborator, backed by
//! lopdf in production.

use crate::error::{DocsplitError, Result};
use crate::loader::{Document, DocumentLoader, SourceKind};
use crate::utils::has_extension;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension recognized by the PDF loader
const PDF_EXTENSION: &str = "pdf";

/// Page-text extraction collaborator.
///
/// Given a PDF file path, returns the text of every page in page order.
pub trait PdfTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Production extractor backed by lopdf
#[derive(Debug, Default)]
pub struct LopdfTextExtractor;

impl PdfTextExtractor for LopdfTextExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let document = lopdf::Document::load(path).map_err(|e| {
            DocsplitError::Extraction(format!("failed to open {}: {}", path.display(), e))
        })?;

        let mut pages = Vec::new();
        for (&number, _) in document.get_pages().iter() {
            let text = document.extract_text(&[number]).map_err(|e| {
                DocsplitError::Extraction(format!(
                    "failed to extract page {} of {}: {}",
                    number,
                    path.display(),
                    e
                ))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }
}

/// Loads documents from a `.pdf` file or a directory tree.
///
/// Single-file mode produces one document holding the page texts concatenated
/// in page order with no separator. Directory mode walks the tree recursively
/// (sorted by file name) and produces one document per PDF. Extraction
/// failures on a matching file propagate; only non-matching file types are
/// skipped.
pub struct PdfFileLoader {
    path: PathBuf,
    extractor: Box<dyn PdfTextExtractor>,
}

impl PdfFileLoader {
    /// Create a loader using the lopdf-backed extractor
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_extractor(path, Box::new(LopdfTextExtractor))
    }

    /// Create a loader with a custom page-text extractor
    pub fn with_extractor<P: AsRef<Path>>(path: P, extractor: Box<dyn PdfTextExtractor>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            extractor,
        }
    }

    fn read_pdf(&self, path: &Path) -> Result<Document> {
        log::debug!("Extracting text from PDF {}", path.display());

        let pages = self.extractor.extract_pages(path)?;
        // Page texts join with no separator
        let text = pages.concat();

        log::debug!(
            "Extracted {} pages ({} chars) from {}",
            pages.len(),
            text.chars().count(),
            path.display()
        );
        Ok(Document::with_source(text, path))
    }

    fn load_directory(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), PDF_EXTENSION) {
                documents.push(self.read_pdf(entry.path())?);
            }
        }

        log::info!(
            "Loaded {} PDF documents from {}",
            documents.len(),
            self.path.display()
        );
        Ok(documents)
    }
}

impl DocumentLoader for PdfFileLoader {
    fn validate(&self) -> Result<SourceKind> {
        if self.path.is_dir() {
            Ok(SourceKind::Directory)
        } else if self.path.is_file() && has_extension(&self.path, PDF_EXTENSION) {
            Ok(SourceKind::File)
        } else {
            Err(DocsplitError::InvalidInput(format!(
                "{} is neither a directory nor a .{} file",
                self.path.display(),
                PDF_EXTENSION
            )))
        }
    }

    fn load_documents(&self) -> Result<Vec<Document>> {
        match self.validate()? {
            SourceKind::File => Ok(vec![self.read_pdf(&self.path)?]),
            SourceKind::Directory => self.load_directory(),
        }
    }
}
