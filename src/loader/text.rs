//! Plain text file loading

use crate::error::{DocsplitError, Result};
use crate::loader::{Document, DocumentLoader, SourceKind};
use crate::utils::has_extension;
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension recognized by the text loader
const TEXT_EXTENSION: &str = "txt";

/// Loads plain text documents from a `.txt` file or a directory tree.
///
/// In directory mode the tree is walked recursively with entries sorted by
/// file name, so enumeration order is deterministic. Files that do not carry
/// the `.txt` extension are skipped silently; everything else about a load is
/// fail-fast (the first unreadable or undecodable matching file aborts the
/// whole call).
pub struct TextFileLoader {
    path: PathBuf,
    encoding: &'static Encoding,
}

impl TextFileLoader {
    /// Create a loader that decodes files as UTF-8
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Create a loader with an explicit encoding label (e.g. "windows-1252")
    pub fn with_encoding<P: AsRef<Path>>(path: P, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            DocsplitError::InvalidConfig(format!("unknown encoding label: {label}"))
        })?;

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            encoding,
        })
    }

    /// Name of the encoding this loader decodes with
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    fn read_file(&self, path: &Path) -> Result<Document> {
        let bytes = std::fs::read(path)?;
        let text = self.decode(&bytes, path)?;
        log::debug!("Loaded text file {} ({} chars)", path.display(), text.chars().count());
        Ok(Document::with_source(text, path))
    }

    fn decode(&self, bytes: &[u8], path: &Path) -> Result<String> {
        // Malformed sequences are an error, never replaced with U+FFFD
        match self
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
        {
            Some(text) => Ok(text.into_owned()),
            None => Err(DocsplitError::Decode(format!(
                "{} contains byte sequences that are not valid {}",
                path.display(),
                self.encoding.name()
            ))),
        }
    }

    fn load_directory(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), TEXT_EXTENSION) {
                documents.push(self.read_file(entry.path())?);
            }
        }

        log::info!(
            "Loaded {} text documents from {}",
            documents.len(),
            self.path.display()
        );
        Ok(documents)
    }
}

impl DocumentLoader for TextFileLoader {
    fn validate(&self) -> Result<SourceKind> {
        if self.path.is_dir() {
            Ok(SourceKind::Directory)
        } else if self.path.is_file() && has_extension(&self.path, TEXT_EXTENSION) {
            Ok(SourceKind::File)
        } else {
            Err(DocsplitError::InvalidInput(format!(
                "{} is neither a directory nor a .{} file",
                self.path.display(),
                TEXT_EXTENSION
            )))
        }
    }

    fn load_documents(&self) -> Result<Vec<Document>> {
        match self.validate()? {
            SourceKind::File => Ok(vec![self.read_file(&self.path)?]),
            SourceKind::Directory => self.load_directory(),
        }
    }
}
