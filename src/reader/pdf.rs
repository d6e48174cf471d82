//! PDF reader backed by `pdf-extract`.

use std::io::Write;

use super::{DocumentReader, ReaderHint};
use crate::error::{Result, ScholarError};
use crate::types::PageRecord;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracts per-page text from PDF payloads.
///
/// The payload is spooled to a named temp file because the extractor reads
/// from a path; the [`tempfile::NamedTempFile`] guard removes the file on
/// every exit path, including extractor failure.
pub struct PdfReader;

impl DocumentReader for PdfReader {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn supports(&self, hint: &ReaderHint<'_>) -> bool {
        hint.magic.starts_with(PDF_MAGIC) || hint.has_extension("pdf")
    }

    fn extract(&self, bytes: &[u8], hint: &ReaderHint<'_>) -> Result<Vec<PageRecord>> {
        let mut spool = tempfile::Builder::new()
            .prefix("scholar-upload-")
            .suffix(".pdf")
            .tempfile()?;
        spool.write_all(bytes)?;
        spool.flush()?;

        let pages = pdf_extract::extract_text_by_pages(spool.path()).map_err(|err| {
            ScholarError::Ingest {
                source: hint.name.to_string(),
                reason: err.to_string(),
            }
        })?;

        let records: Vec<PageRecord> = pages
            .into_iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(idx, text)| PageRecord::new(hint.name, idx as u32 + 1, text))
            .collect();

        tracing::debug!(source = %hint.name, pages = records.len(), "pdf extraction complete");
        Ok(records)
    }
}
