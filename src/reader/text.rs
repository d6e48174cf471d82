//! Passthrough reader for plain-text uploads.

use super::{DocumentReader, ReaderHint};
use crate::error::Result;
use crate::types::PageRecord;

/// Treats `.txt`/`.md` payloads as a single page of text.
pub struct TextReader;

impl DocumentReader for TextReader {
    fn name(&self) -> &'static str {
        "text-passthrough"
    }

    fn supports(&self, hint: &ReaderHint<'_>) -> bool {
        hint.has_extension("txt") || hint.has_extension("md")
    }

    fn extract(&self, bytes: &[u8], hint: &ReaderHint<'_>) -> Result<Vec<PageRecord>> {
        let text = String::from_utf8_lossy(bytes);
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![PageRecord::new(hint.name, 1, text.into_owned())])
    }
}
