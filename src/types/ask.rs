//! Request/response types for retrieval-augmented answering.

use serde::{Deserialize, Serialize};

use super::chunk::Chunk;
use crate::constants::RETRIEVAL_TOP_K;

/// Language the assistant is asked to answer in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnswerLanguage {
    #[default]
    Hinglish,
    English,
    Hindi,
}

impl AnswerLanguage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hinglish => "Hinglish",
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }
}

/// Request payload for one question against the workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Passages to retrieve; defaults to [`RETRIEVAL_TOP_K`].
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Overrides the session's language selection when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<AnswerLanguage>,
}

fn default_top_k() -> usize {
    RETRIEVAL_TOP_K
}

impl AskRequest {
    pub fn new<S: Into<String>>(question: S) -> Self {
        Self {
            question: question.into(),
            top_k: RETRIEVAL_TOP_K,
            language: None,
        }
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: AnswerLanguage) -> Self {
        self.language = Some(language);
        self
    }
}

/// One retrieved passage in rank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedPassage {
    /// 1-based retrieval rank.
    pub rank: usize,
    /// Cosine similarity against the query embedding.
    pub score: f32,
    pub source: String,
    pub page: u32,
    pub text: String,
}

impl RetrievedPassage {
    pub(crate) fn from_chunk(rank: usize, score: f32, chunk: &Chunk) -> Self {
        Self {
            rank,
            score,
            source: chunk.source.clone(),
            page: chunk.page,
            text: chunk.text.clone(),
        }
    }
}

/// Outcome of the retrieval step, modeled explicitly so prompt composition
/// branches on it instead of relying on an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "passages")]
pub enum RetrievedContext {
    /// No persisted workspace existed; the model answers ungrounded.
    Absent,
    /// Passages in retrieval rank order.
    Present(Vec<RetrievedPassage>),
}

impl RetrievedContext {
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Present(passages) if !passages.is_empty())
    }

    #[must_use]
    pub fn passages(&self) -> &[RetrievedPassage] {
        match self {
            Self::Absent => &[],
            Self::Present(passages) => passages,
        }
    }

    /// Passage texts joined by newlines, in rank order.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.passages()
            .iter()
            .map(|passage| passage.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AskStats {
    /// Time spent loading the index and retrieving passages, in milliseconds.
    pub retrieval_ms: u128,
    /// Time spent inside the hosted generation call, in milliseconds.
    pub generation_ms: u128,
    /// End-to-end latency in milliseconds.
    pub latency_ms: u128,
}

/// Response for `ask`: the generated answer plus its retrieval grounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    pub context: RetrievedContext,
    pub stats: AskStats,
}
