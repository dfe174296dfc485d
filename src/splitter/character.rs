//! Fixed-size character chunking with overlap

use crate::config::SplitterConfig;
use crate::error::{DocsplitError, Result};

/// Splits text into fixed-size overlapping chunks by character count.
///
/// Chunks are measured in Unicode scalar values, never bytes, so multi-byte
/// text splits cleanly on character boundaries. The splitter is a pure
/// transformation: no I/O, no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl CharacterTextSplitter {
    /// Create a splitter.
    ///
    /// Fails when `chunk_size <= chunk_overlap`, since the stepping arithmetic
    /// would stall or walk backwards.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size <= chunk_overlap {
            return Err(DocsplitError::InvalidConfig(format!(
                "chunk_size ({chunk_size}) must be greater than chunk_overlap ({chunk_overlap})"
            )));
        }

        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Create a splitter from a [`SplitterConfig`]
    pub fn from_config(config: &SplitterConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Chunk size in characters
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Characters shared between adjacent chunks
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split one text into chunks.
    ///
    /// Starting at offset 0, emits `[offset, offset + chunk_size)` clamped to
    /// the text length, then advances the offset by
    /// `chunk_size - chunk_overlap`, while the offset is inside the text.
    /// Zero-length input yields zero chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let step = self.chunk_size - self.chunk_overlap;

        let mut chunks = Vec::new();
        let mut offset = 0;
        while offset < chars.len() {
            let end = usize::min(offset + self.chunk_size, chars.len());
            chunks.push(chars[offset..end].iter().collect());
            offset += step;
        }

        chunks
    }

    /// Split each text in the given order and concatenate the chunk
    /// sequences, preserving both document order and intra-document order.
    pub fn split_texts<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let mut chunks = Vec::new();
        for text in texts {
            chunks.extend(self.split(text.as_ref()));
        }
        chunks
    }
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        let config = SplitterConfig::default();
        Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        }
    }
}
