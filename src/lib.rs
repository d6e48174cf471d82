#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
//
// Strategic lint exceptions, allowed project-wide:
//
// Documentation lints: internal/self-documenting functions don't need
// extensive docs; public APIs should still carry proper documentation.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Cast safety: casts here are bounded by real-world sizes (page counts,
// chunk counts, millisecond timings).
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
//
// Ergonomics trade-offs:
#![allow(clippy::needless_pass_by_value)] // builders take owned values intentionally
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

//! # scholar-core
//!
//! Engine of a retrieval-augmented study assistant: uploaded PDF notes are
//! extracted per page, split into overlapping chunks, embedded, and
//! persisted as a named workspace index; questions are answered by cosine
//! retrieval over that index plus a hosted chat-model call, with the chat
//! transcript held in an explicit in-memory [`Session`].
//!
//! The embedding model and the chat model are external services reached
//! over HTTPS; everything else lives in this crate.

/// The scholar-core crate version (matches `Cargo.toml`).
pub const SCHOLAR_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod chunker;
pub mod config;
pub mod constants;
pub mod embed;
pub mod error;
mod http;
pub mod index;
pub mod llm;
pub mod prompt;
pub mod reader;
pub mod session;
pub mod types;

pub use chunker::{ChunkerOptions, chunk_pages, split_text};
pub use config::{ChatConfig, EmbedderConfig, WorkspaceConfig};
pub use embed::{ApiEmbedder, Embedder};
pub use error::{Result, ScholarError};
pub use index::store::{IndexManifest, METRIC_COSINE};
pub use index::{ScoredHit, VectorIndex};
pub use llm::{AnswerGenerator, ChatClient};
pub use prompt::compose_prompt;
pub use reader::{DocumentReader, PdfReader, ReaderHint, ReaderRegistry, TextReader, Upload};
pub use session::Session;
pub use types::{
    AnswerLanguage, AskRequest, AskResponse, AskStats, Chunk, IndexedChunk, Message, PageRecord,
    RetrievedContext, RetrievedPassage, Role, SyncReport,
};
