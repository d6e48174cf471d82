//! Overlapping fixed-size text chunking.
//!
//! Pages are split independently so no chunk crosses a page boundary.
//! Each window is cut at most `max_chars` characters after its start; the
//! cut prefers the last whitespace run in the window tail so chunks tend
//! to end on natural boundaries. The next window starts exactly
//! `overlap_chars` before the previous cut, so consecutive chunks of one
//! page always share exactly that many characters, wherever the cut fell.

use crate::constants::{CHUNK_BOUNDARY_LOOKBACK, CHUNK_MAX_CHARS, CHUNK_OVERLAP_CHARS};
use crate::error::{Result, ScholarError};
use crate::types::{Chunk, PageRecord};

#[derive(Debug, Clone)]
pub struct ChunkerOptions {
    /// Maximum characters per chunk.
    pub max_chars: usize,
    /// Characters shared between consecutive chunks.
    pub overlap_chars: usize,
    /// How far back from the window end to look for a whitespace cut.
    pub boundary_lookback: usize,
}

impl Default for ChunkerOptions {
    fn default() -> Self {
        Self {
            max_chars: CHUNK_MAX_CHARS,
            overlap_chars: CHUNK_OVERLAP_CHARS,
            boundary_lookback: CHUNK_BOUNDARY_LOOKBACK,
        }
    }
}

impl ChunkerOptions {
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(ScholarError::InvalidOptions {
                reason: "max_chars must be non-zero".into(),
            });
        }
        if self.overlap_chars >= self.max_chars {
            return Err(ScholarError::InvalidOptions {
                reason: "overlap_chars must be smaller than max_chars".into(),
            });
        }
        Ok(())
    }
}

/// Split one text flow into overlapping chunks of at most `max_chars`.
///
/// The final chunk may be shorter and has no overlap partner after it.
/// Whitespace-only input yields no chunks.
pub fn split_text(text: &str, options: &ChunkerOptions) -> Result<Vec<String>> {
    options.validate()?;

    let chars: Vec<char> = text.chars().collect();
    if chars.iter().all(|c| c.is_whitespace()) {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    loop {
        let window_end = (start + options.max_chars).min(chars.len());
        let cut = if window_end == chars.len() {
            window_end
        } else {
            natural_cut(&chars, start, window_end, options).unwrap_or(window_end)
        };

        chunks.push(chars[start..cut].iter().collect::<String>());
        if cut == chars.len() {
            break;
        }
        start = cut - options.overlap_chars;
    }

    Ok(chunks)
}

/// Last whitespace position in the window tail, as a cut one past it.
///
/// Only cuts that keep the next window moving forward are considered.
fn natural_cut(
    chars: &[char],
    start: usize,
    window_end: usize,
    options: &ChunkerOptions,
) -> Option<usize> {
    let lookback_floor = window_end.saturating_sub(options.boundary_lookback);
    // cut - overlap must exceed start or the split would stall
    let progress_floor = start + options.overlap_chars + 1;
    let floor = lookback_floor.max(progress_floor);
    if floor >= window_end {
        return None;
    }

    (floor..window_end)
        .rev()
        .find(|&idx| chars[idx].is_whitespace())
        .map(|idx| idx + 1)
}

/// Chunk every page record, assigning per-page ordinals.
pub fn chunk_pages(pages: &[PageRecord], options: &ChunkerOptions) -> Result<Vec<Chunk>> {
    let mut chunks = Vec::new();
    for page in pages {
        for (ordinal, text) in split_text(&page.text, options)?.into_iter().enumerate() {
            chunks.push(Chunk {
                source: page.source.clone(),
                page: page.page,
                ordinal: ordinal as u32,
                text,
            });
        }
    }
    tracing::debug!(pages = pages.len(), chunks = chunks.len(), "chunking complete");
    Ok(chunks)
}
