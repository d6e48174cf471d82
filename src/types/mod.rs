//! Public types exposed by the `scholar-core` crate.

pub mod ask;
pub mod chunk;
pub mod message;
pub mod sync;

pub use ask::{
    AnswerLanguage, AskRequest, AskResponse, AskStats, RetrievedContext, RetrievedPassage,
};
pub use chunk::{Chunk, IndexedChunk, PageRecord};
pub use message::{Message, Role};
pub use sync::SyncReport;
