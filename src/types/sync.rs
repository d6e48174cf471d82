//! Report returned by a successful workspace sync.

use serde::{Deserialize, Serialize};

/// Counters describing one ingest-and-index pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyncReport {
    pub documents: usize,
    pub pages: usize,
    pub chunks: usize,
    /// End-to-end sync latency in milliseconds.
    pub elapsed_ms: u128,
}
