//! API layer for docsplit-rs
//!
//! This module provides the high-level interface for turning document
//! sources into chunk sequences in one pass.

pub mod pipeline;

// Re-export main API types
pub use pipeline::{ChunkPipeline, IngestStats};
