//! Explicit configuration objects for workspaces and upstream services.
//!
//! Nothing in the crate reads a hard-coded path or a hidden global: the
//! workspace location and both client endpoints travel through these
//! structs, so independent workspaces and alternate deployments need no
//! code change.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    API_KEY_ENV, DEFAULT_BASE_DIR, DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL,
    DEFAULT_EMBED_BASE_URL, DEFAULT_EMBED_DIMENSION, DEFAULT_EMBED_MODEL, DEFAULT_WORKSPACE,
    EMBED_API_KEY_ENV, REQUEST_TIMEOUT,
};

/// Identifies one named, disk-persisted workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Directory under which every workspace lives.
    pub base_dir: PathBuf,
    /// Workspace name; becomes a subdirectory of `base_dir`.
    pub workspace: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            workspace: DEFAULT_WORKSPACE.to_string(),
        }
    }
}

impl WorkspaceConfig {
    pub fn new<P: AsRef<Path>, S: Into<String>>(base_dir: P, workspace: S) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            workspace: workspace.into(),
        }
    }

    /// Directory holding this workspace's manifest and vector data.
    #[must_use]
    pub fn dir(&self) -> PathBuf {
        self.base_dir.join(&self.workspace)
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.dir().join(crate::constants::MANIFEST_FILE)
    }

    #[must_use]
    pub fn vectors_path(&self) -> PathBuf {
        self.dir().join(crate::constants::VECTORS_FILE)
    }
}

/// Connection settings for the hosted chat-completion service.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: std::time::Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_key: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ChatConfig {
    /// Default settings with the key taken from `SCHOLAR_API_KEY`.
    ///
    /// An absent key is not validated here; the first generation call
    /// surfaces a typed `Auth` error instead.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    #[must_use]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Connection settings for the hosted embedding service.
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    pub base_url: String,
    pub model: String,
    pub dimension: usize,
    pub api_key: Option<String>,
    pub timeout: std::time::Duration,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EMBED_BASE_URL.to_string(),
            model: DEFAULT_EMBED_MODEL.to_string(),
            dimension: DEFAULT_EMBED_DIMENSION,
            api_key: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl EmbedderConfig {
    /// Default settings with the key taken from `SCHOLAR_EMBED_API_KEY`,
    /// falling back to `SCHOLAR_API_KEY` for single-provider deployments.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(EMBED_API_KEY_ENV)
                .or_else(|_| env::var(API_KEY_ENV))
                .ok(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    #[must_use]
    pub fn with_model<S: Into<String>>(mut self, model: S, dimension: usize) -> Self {
        self.model = model.into();
        self.dimension = dimension;
        self
    }

    #[must_use]
    pub fn with_api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
