//! Chunk and page records produced by ingestion and chunking.

use serde::{Deserialize, Serialize};

/// One page of extracted text from one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    /// Upload file name the page came from.
    pub source: String,
    /// 1-based page number within the source.
    pub page: u32,
    pub text: String,
}

impl PageRecord {
    pub fn new<S: Into<String>, T: Into<String>>(source: S, page: u32, text: T) -> Self {
        Self {
            source: source.into(),
            page,
            text: text.into(),
        }
    }
}

/// A bounded span of source text, immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub source: String,
    pub page: u32,
    /// Position of this chunk within its page, 0-based.
    pub ordinal: u32,
    pub text: String,
}

/// A chunk paired with its embedding; owned by the vector index.
///
/// Invariant: `embedding.len()` equals the index dimension for every entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    pub chunk: Chunk,
    pub embedding: Vec<f32>,
}
