//! Crate-wide error type and `Result` alias.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ScholarError>;

/// Errors surfaced by the ingestion, indexing, and answering pipeline.
///
/// External-service failures are mapped to typed variants (`Auth`,
/// `RateLimited`, `Timeout`, `Api`) instead of leaking raw HTTP errors to
/// callers. A missing workspace at ask time is deliberately NOT an error;
/// see [`crate::types::RetrievedContext`].
#[derive(Debug, Error)]
pub enum ScholarError {
    /// Text extraction failed for one upload; the whole sync aborts.
    #[error("failed to ingest '{source}': {reason}")]
    Ingest { r#source: String, reason: String },

    /// An upload produced no extractable text on any page.
    #[error("no text extracted from '{source}'")]
    EmptyExtraction { r#source: String },

    /// No reader in the registry claimed the upload.
    #[error("unsupported document '{source}'")]
    UnsupportedDocument { r#source: String },

    /// No persisted index exists for the workspace at this path.
    #[error("workspace index not found at {path:?}")]
    WorkspaceNotFound { path: PathBuf },

    /// The persisted index disagrees with its manifest.
    #[error("corrupt workspace index at {path:?}: {reason}")]
    IndexCorrupt { path: PathBuf, reason: String },

    /// The persisted index was built by a different embedding model.
    #[error("embedding model mismatch: index built with '{expected}', embedder is '{actual}'")]
    EmbeddingModelMismatch { expected: String, actual: String },

    /// An embedding had the wrong number of dimensions.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The upstream service rejected our credentials (HTTP 401/403).
    #[error("authentication rejected by {service} (HTTP {status})")]
    Auth { service: String, status: u16 },

    /// The upstream service throttled us (HTTP 429) past the retry budget.
    #[error("rate limited by {service}")]
    RateLimited { service: String },

    /// The request did not complete within the configured deadline.
    #[error("{service} request timed out after {elapsed_ms}ms")]
    Timeout { service: String, elapsed_ms: u64 },

    /// Any other non-success response from an upstream service.
    #[error("{service} request failed (HTTP {status}): {message}")]
    Api {
        service: String,
        status: u16,
        message: String,
    },

    /// The upstream response parsed but did not contain the expected payload.
    #[error("malformed {service} response: {reason}")]
    MalformedResponse { service: String, reason: String },

    /// Invalid component options (e.g. chunk overlap >= chunk size).
    #[error("invalid options: {reason}")]
    InvalidOptions { reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

impl ScholarError {
    /// True for failures worth one bounded retry (transient upstream state).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
