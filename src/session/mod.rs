//! Session state and orchestration of the sync/ask/clear operations.
//!
//! A [`Session`] is one user's conversational state: the chat transcript,
//! the UI selections, and the workspace the transcript is grounded in.
//! It is an explicit object passed to callers, never a process global, and
//! lives only in memory; clearing or dropping it never touches the
//! persisted workspace.

mod ask;
mod sync;

use crate::chunker::ChunkerOptions;
use crate::config::WorkspaceConfig;
use crate::index::store;
use crate::reader::ReaderRegistry;
use crate::types::{AnswerLanguage, Message};

pub struct Session {
    pub(crate) config: WorkspaceConfig,
    pub(crate) registry: ReaderRegistry,
    pub(crate) chunker: ChunkerOptions,
    language: AnswerLanguage,
    voice_enabled: bool,
    messages: Vec<Message>,
}

impl Session {
    #[must_use]
    pub fn new(config: WorkspaceConfig) -> Self {
        Self {
            config,
            registry: ReaderRegistry::default(),
            chunker: ChunkerOptions::default(),
            language: AnswerLanguage::default(),
            voice_enabled: false,
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn workspace(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Transcript in strict chronological order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn language(&self) -> AnswerLanguage {
        self.language
    }

    pub fn set_language(&mut self, language: AnswerLanguage) {
        self.language = language;
    }

    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.voice_enabled = enabled;
    }

    /// True once a sync has persisted an index for this workspace.
    #[must_use]
    pub fn has_synced_workspace(&self) -> bool {
        store::exists(&self.config)
    }

    /// Empty the transcript. The persisted workspace is untouched.
    pub fn clear(&mut self) {
        tracing::debug!(messages = self.messages.len(), "clearing transcript");
        self.messages.clear();
    }

    pub(crate) fn push_exchange(&mut self, question: &str, answer: &str) {
        self.messages.push(Message::user(question));
        self.messages.push(Message::assistant(answer));
    }
}
