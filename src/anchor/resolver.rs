//! Offset resolution
//!
//! Maps a selected quote back to character offsets in the chapter's
//! plain-text rendering for persistence.

/// Character offsets delimiting a quote within the plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

/// Compute the offsets of `quote` within `plain_text`.
///
/// First-occurrence substring search, reported in character (not byte)
/// offsets. When the quote cannot be found verbatim, for instance because
/// the host's selection normalized whitespace differently than the
/// plain-text extraction, the result degrades to `{0, quote_len}` rather
/// than failing. Offsets must be computed from the untruncated quote; the
/// stored quote is capped separately.
pub fn resolve_offsets(quote: &str, plain_text: &str) -> OffsetRange {
    match plain_text.find(quote) {
        Some(byte_idx) => {
            let start = plain_text[..byte_idx].chars().count();
            OffsetRange {
                start,
                end: start + quote.chars().count(),
            }
        }
        None => OffsetRange {
            start: 0,
            end: quote.chars().count(),
        },
    }
}
