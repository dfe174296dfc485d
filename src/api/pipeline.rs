//! ChunkPipeline - Main ingestion API
//!
//! This provides the high-level interface for loading documents from mixed
//! sources and splitting them into overlapping chunks.

use crate::config::Config;
use crate::error::Result;
use crate::loader::{Document, DocumentLoader, PdfFileLoader, TextFileLoader};
use crate::splitter::CharacterTextSplitter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Statistics for one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngestStats {
    /// Documents accumulated in the pipeline
    pub total_documents: usize,

    /// Chunks produced by the split
    pub total_chunks: usize,

    /// Characters across all documents
    pub total_chars: usize,

    /// Split time in seconds
    pub processing_time: f64,
}

/// High-level document-to-chunk pipeline.
///
/// Documents accumulate across `add_*` calls on the same instance; call
/// [`ChunkPipeline::clear`] to reset. The loaders themselves stay stateless,
/// so the accumulate-on-reuse behavior lives only here, where it is explicit.
pub struct ChunkPipeline {
    config: Config,
    splitter: CharacterTextSplitter,
    documents: Vec<Document>,
}

impl ChunkPipeline {
    /// Create a pipeline with optional configuration
    pub fn new(config: Option<Config>) -> Result<Self> {
        let config = config.unwrap_or_default();
        config.validate()?;

        let splitter = CharacterTextSplitter::from_config(&config.splitter)?;

        Ok(Self {
            config,
            splitter,
            documents: Vec::new(),
        })
    }

    /// Add one in-memory text blob as a document
    pub fn add_text(&mut self, text: &str, source: Option<PathBuf>) {
        let document = match source {
            Some(source) => Document::with_source(text, source),
            None => Document::new(text),
        };
        self.documents.push(document);
        log::info!("Added 1 document from text. Total: {}", self.documents.len());
    }

    /// Load a `.txt` file or a directory of text files
    pub fn add_text_source<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let loader = TextFileLoader::with_encoding(path.as_ref(), &self.config.loader.encoding)?;
        let documents = loader.load_documents()?;
        self.append(documents, path.as_ref())
    }

    /// Load a `.pdf` file or a directory of PDFs
    pub fn add_pdf_source<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let loader = PdfFileLoader::new(path.as_ref());
        let documents = loader.load_documents()?;
        self.append(documents, path.as_ref())
    }

    fn append(&mut self, documents: Vec<Document>, path: &Path) -> Result<usize> {
        let count = documents.len();
        self.documents.extend(documents);
        log::info!(
            "Added {} documents from {}. Total: {}",
            count,
            path.display(),
            self.documents.len()
        );
        Ok(count)
    }

    /// Split every accumulated document, preserving document order and
    /// intra-document chunk order
    pub fn split_all(&self) -> Vec<String> {
        let texts: Vec<&str> = self.documents.iter().map(|d| d.text.as_str()).collect();
        self.splitter.split_texts(&texts)
    }

    /// Split all documents and report statistics in one pass
    pub fn run(&self) -> (Vec<String>, IngestStats) {
        let start = Instant::now();
        let chunks = self.split_all();
        let stats = IngestStats {
            total_documents: self.documents.len(),
            total_chunks: chunks.len(),
            total_chars: self.documents.iter().map(|d| d.char_count()).sum(),
            processing_time: start.elapsed().as_secs_f64(),
        };

        log::info!(
            "Split {} documents into {} chunks in {:.3}s",
            stats.total_documents,
            stats.total_chunks,
            stats.processing_time
        );
        (chunks, stats)
    }

    /// Accumulated documents, in the order they were added
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Current document count
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Drop all accumulated documents
    pub fn clear(&mut self) {
        self.documents.clear();
        log::info!("Cleared all documents");
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
