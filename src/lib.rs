//! # docsplit-rs
//!
//! Extracts plain text from heterogeneous document sources (plain text files
//! and PDFs, single file or recursive directory) and splits it into
//! fixed-size overlapping chunks suitable for downstream embedding and
//! retrieval pipelines.
//!
//! ## Quick Start
//!
//! ```rust
//! use docsplit_rs::CharacterTextSplitter;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let splitter = CharacterTextSplitter::new(4, 1)?;
//!     let chunks = splitter.split("ABCDEFGHIJ");
//!     assert_eq!(chunks, ["ABCD", "DEFG", "GHIJ", "J"]);
//!     Ok(())
//! }
//! ```
//!
//! Loading from disk goes through the loaders, or the [`ChunkPipeline`] for
//! mixed sources in one pass:
//!
//! ```rust,no_run
//! use docsplit_rs::ChunkPipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut pipeline = ChunkPipeline::new(None)?;
//!     pipeline.add_text_source("data/corpus")?;
//!     pipeline.add_pdf_source("data/manual.pdf")?;
//!
//!     let (chunks, stats) = pipeline.run();
//!     println!("{} documents -> {} chunks", stats.total_documents, stats.total_chunks);
//!
//!     for chunk in chunks.iter().take(2) {
//!         println!("{}", chunk);
//!     }
//!     Ok(())
//! }
//! ```

// Core modules
pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod splitter;
pub mod utils;

// Re-export main API types
pub use api::{ChunkPipeline, IngestStats};
pub use config::{Config, LoaderConfig, SplitterConfig};
pub use error::{DocsplitError, Result};

// Re-export commonly used types
pub use loader::{
    Document, DocumentLoader, LopdfTextExtractor, PdfFileLoader, PdfTextExtractor, SourceKind,
    TextFileLoader,
};
pub use splitter::CharacterTextSplitter;
