//! In-memory vector index with exhaustive cosine retrieval.
//!
//! The index owns every `(chunk, embedding)` pair for one workspace and is
//! either absent or fully built; partial state is never exposed. Metric is
//! cosine similarity, descending, ties broken by insertion order.

pub mod store;

use crate::embed::Embedder;
use crate::error::{Result, ScholarError};
use crate::types::{Chunk, IndexedChunk};

/// One ranked retrieval hit.
#[derive(Debug, Clone)]
pub struct ScoredHit {
    /// 1-based retrieval rank.
    pub rank: usize,
    /// Cosine similarity against the query embedding.
    pub score: f32,
    pub chunk: Chunk,
}

/// A fully built workspace index, pinned to one embedding model.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    entries: Vec<IndexedChunk>,
    model: String,
    dimension: usize,
}

impl VectorIndex {
    /// Embed every chunk and assemble the index.
    ///
    /// Enforces the one-embedding-per-chunk invariant and the embedder's
    /// declared dimension before any entry is accepted.
    pub fn build<E>(chunks: Vec<Chunk>, embedder: &E) -> Result<Self>
    where
        E: Embedder + ?Sized,
    {
        let texts: Vec<&str> = chunks.iter().map(|chunk| chunk.text.as_str()).collect();
        let embeddings = embedder.embed_texts(&texts)?;
        if embeddings.len() != chunks.len() {
            return Err(ScholarError::MalformedResponse {
                service: "embeddings".to_string(),
                reason: format!(
                    "expected {} embeddings, got {}",
                    chunks.len(),
                    embeddings.len()
                ),
            });
        }

        let dimension = embedder.dimension();
        let mut entries = Vec::with_capacity(chunks.len());
        for (chunk, embedding) in chunks.into_iter().zip(embeddings) {
            if embedding.len() != dimension {
                return Err(ScholarError::DimensionMismatch {
                    expected: dimension,
                    actual: embedding.len(),
                });
            }
            entries.push(IndexedChunk { chunk, embedding });
        }

        tracing::info!(
            chunks = entries.len(),
            model = embedder.model_name(),
            dimension,
            "vector index built"
        );
        Ok(Self {
            entries,
            model: embedder.model_name().to_string(),
            dimension,
        })
    }

    pub(crate) fn from_parts(entries: Vec<IndexedChunk>, model: String, dimension: usize) -> Self {
        Self {
            entries,
            model,
            dimension,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn entries(&self) -> &[IndexedChunk] {
        &self.entries
    }

    /// Refuse queries from an embedder the index was not built with.
    pub fn ensure_compatible<E>(&self, embedder: &E) -> Result<()>
    where
        E: Embedder + ?Sized,
    {
        if embedder.model_name() != self.model {
            return Err(ScholarError::EmbeddingModelMismatch {
                expected: self.model.clone(),
                actual: embedder.model_name().to_string(),
            });
        }
        if embedder.dimension() != self.dimension {
            return Err(ScholarError::DimensionMismatch {
                expected: self.dimension,
                actual: embedder.dimension(),
            });
        }
        Ok(())
    }

    /// The `k` nearest chunks by cosine similarity, best first.
    pub fn query(&self, query_embedding: &[f32], k: usize) -> Result<Vec<ScoredHit>> {
        if query_embedding.len() != self.dimension {
            return Err(ScholarError::DimensionMismatch {
                expected: self.dimension,
                actual: query_embedding.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx, cosine_similarity(query_embedding, &entry.embedding)))
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let hits: Vec<ScoredHit> = scored
            .into_iter()
            .take(k.max(1))
            .enumerate()
            .map(|(rank, (idx, score))| ScoredHit {
                rank: rank + 1,
                score,
                chunk: self.entries[idx].chunk.clone(),
            })
            .collect();

        tracing::debug!(hits = hits.len(), "vector query complete");
        Ok(hits)
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut sum_a = 0.0f32;
    let mut sum_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        sum_a += x * x;
        sum_b += y * y;
    }

    if sum_a <= f32::EPSILON || sum_b <= f32::EPSILON {
        0.0
    } else {
        dot / (sum_a.sqrt() * sum_b.sqrt())
    }
}
