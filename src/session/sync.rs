//! Workspace sync: ingest uploads, chunk, embed, persist.

use std::time::Instant;

use super::Session;
use crate::chunker::chunk_pages;
use crate::embed::Embedder;
use crate::error::Result;
use crate::index::{VectorIndex, store};
use crate::reader::Upload;
use crate::types::SyncReport;

impl Session {
    /// Ingest every upload and replace the persisted workspace index.
    ///
    /// Runs to completion before returning; a failure on any upload aborts
    /// the whole sync and leaves the previously persisted workspace as it
    /// was. Syncing the same uploads twice is idempotent by overwrite.
    pub fn sync<E>(&mut self, uploads: &[Upload], embedder: &E) -> Result<SyncReport>
    where
        E: Embedder + ?Sized,
    {
        let started = Instant::now();
        tracing::info!(
            uploads = uploads.len(),
            workspace = %self.config.workspace,
            "sync started"
        );

        let pages = self.registry.ingest(uploads)?;
        let chunks = chunk_pages(&pages, &self.chunker)?;
        let index = VectorIndex::build(chunks, embedder)?;
        store::save(&index, &self.config)?;

        let report = SyncReport {
            documents: uploads.len(),
            pages: pages.len(),
            chunks: index.len(),
            elapsed_ms: started.elapsed().as_millis(),
        };
        tracing::info!(
            documents = report.documents,
            pages = report.pages,
            chunks = report.chunks,
            elapsed_ms = report.elapsed_ms as u64,
            "sync complete"
        );
        Ok(report)
    }
}
