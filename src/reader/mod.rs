//! Document reader trait and registry for upload ingestion.
//!
//! Readers turn one uploaded binary payload into per-page text records.
//! The registry routes each upload to the first reader that claims it;
//! an upload no reader claims aborts the sync with a typed error.

mod pdf;
mod text;

pub use pdf::PdfReader;
pub use text::TextReader;

use crate::error::{Result, ScholarError};
use crate::types::PageRecord;

/// One uploaded file: display name plus raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new<S: Into<String>, B: Into<Vec<u8>>>(name: S, bytes: B) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Hint provided to readers before extraction.
#[derive(Debug, Clone, Copy)]
pub struct ReaderHint<'a> {
    /// Upload file name, used for extension matching.
    pub name: &'a str,
    /// Leading bytes of the payload, used for magic-number matching.
    pub magic: &'a [u8],
}

impl<'a> ReaderHint<'a> {
    #[must_use]
    pub fn new(name: &'a str, bytes: &'a [u8]) -> Self {
        let magic_len = bytes.len().min(8);
        Self {
            name,
            magic: &bytes[..magic_len],
        }
    }

    pub(crate) fn has_extension(&self, ext: &str) -> bool {
        std::path::Path::new(self.name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Trait implemented by readers that can extract per-page text.
pub trait DocumentReader: Send + Sync {
    /// Human-readable name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Return true if this reader is a good match for the provided hint.
    fn supports(&self, hint: &ReaderHint<'_>) -> bool;

    /// Extract one record per non-empty page.
    fn extract(&self, bytes: &[u8], hint: &ReaderHint<'_>) -> Result<Vec<PageRecord>>;
}

/// Registry of document readers used by the sync path.
pub struct ReaderRegistry {
    readers: Vec<Box<dyn DocumentReader>>,
}

impl ReaderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
        }
    }

    pub fn register<R>(&mut self, reader: R)
    where
        R: DocumentReader + 'static,
    {
        self.readers.push(Box::new(reader));
    }

    pub fn find_reader<'a>(&'a self, hint: &ReaderHint<'_>) -> Option<&'a dyn DocumentReader> {
        self.readers
            .iter()
            .map(std::convert::AsRef::as_ref)
            .find(|reader| reader.supports(hint))
    }

    /// Extract every upload in order, aborting on the first failure.
    ///
    /// An upload whose pages are all empty is a typed error rather than a
    /// silent no-op, so a sync never clobbers a workspace with nothing.
    pub fn ingest(&self, uploads: &[Upload]) -> Result<Vec<PageRecord>> {
        let mut pages = Vec::new();
        for upload in uploads {
            let hint = ReaderHint::new(&upload.name, &upload.bytes);
            let reader =
                self.find_reader(&hint)
                    .ok_or_else(|| ScholarError::UnsupportedDocument {
                        source: upload.name.clone(),
                    })?;
            tracing::debug!(source = %upload.name, reader = reader.name(), "extracting upload");
            let extracted = reader.extract(&upload.bytes, &hint)?;
            if extracted.is_empty() {
                return Err(ScholarError::EmptyExtraction {
                    source: upload.name.clone(),
                });
            }
            tracing::info!(
                source = %upload.name,
                pages = extracted.len(),
                "extracted upload"
            );
            pages.extend(extracted);
        }
        Ok(pages)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(PdfReader);
        registry.register(TextReader);
        registry
    }
}
