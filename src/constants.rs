//! Tuning constants shared across the pipeline.

use std::time::Duration;

/// Maximum characters per chunk.
pub const CHUNK_MAX_CHARS: usize = 800;

/// Characters of overlap carried between consecutive chunks of one page.
pub const CHUNK_OVERLAP_CHARS: usize = 100;

/// How far back from the window end the chunker looks for a whitespace cut.
pub const CHUNK_BOUNDARY_LOOKBACK: usize = 120;

/// Passages retrieved per question. Cosine similarity, descending.
pub const RETRIEVAL_TOP_K: usize = 4;

/// Workspace used when the caller does not name one.
pub const DEFAULT_WORKSPACE: &str = "General";

/// Directory holding persisted workspaces unless configured otherwise.
pub const DEFAULT_BASE_DIR: &str = "workspaces";

/// File names inside a workspace directory.
pub const MANIFEST_FILE: &str = "manifest.json";
pub const VECTORS_FILE: &str = "vectors.bin";

/// On-disk index format version, bumped on incompatible layout changes.
pub const INDEX_FORMAT_VERSION: u32 = 1;

/// Deadline for a single embedding or chat request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Backoff before the single retry of a transient upstream failure.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Chat defaults follow the hosted deployment the assistant ships against.
pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.3-70b-versatile";

/// Embedding defaults; any OpenAI-compatible `/embeddings` endpoint works.
pub const DEFAULT_EMBED_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBED_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBED_DIMENSION: usize = 1536;

/// Environment variables consulted by `from_env` constructors.
pub const API_KEY_ENV: &str = "SCHOLAR_API_KEY";
pub const EMBED_API_KEY_ENV: &str = "SCHOLAR_EMBED_API_KEY";
