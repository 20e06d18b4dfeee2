//! Highlight data model
//!
//! A highlight anchors a user-selected excerpt to zero-based character
//! offsets into the chapter's plain-text rendering. Offsets are only valid
//! against the rendering that was current at creation time; there is no
//! content-version guard, so stale offsets degrade to best-effort lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum trimmed selection length accepted by the capturer, in characters.
pub const MIN_SELECTION_CHARS: usize = 3;

/// Maximum trimmed selection length accepted by the capturer, in characters.
pub const MAX_SELECTION_CHARS: usize = 500;

/// Maximum quote length persisted to the backend, in characters.
pub const STORED_QUOTE_CHARS: usize = 300;

/// A stored highlight, as returned by the backend.
///
/// Immutable once created except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    /// Opaque identifier assigned by the backend on creation
    pub id: String,
    pub chapter_id: String,
    pub user_id: String,
    /// The selected excerpt, capped to [`STORED_QUOTE_CHARS`]
    pub quote_text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub created_at: DateTime<Utc>,
}

/// Create payload for a new highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHighlight {
    pub quote_text: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl NewHighlight {
    /// Build a create payload from the original selection and its resolved
    /// offsets.
    ///
    /// The stored quote is truncated to [`STORED_QUOTE_CHARS`] characters;
    /// the offsets are kept as computed from the untruncated quote.
    pub fn from_selection(quote: &str, start_offset: usize, end_offset: usize) -> Self {
        NewHighlight {
            quote_text: truncate_chars(quote, STORED_QUOTE_CHARS),
            start_offset,
            end_offset,
        }
    }

    /// Offset span length, in characters.
    pub fn span_len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }
}

impl Highlight {
    /// Character length of the stored quote, used by the locator to extend
    /// the flash selection.
    pub fn quote_len(&self) -> usize {
        self.quote_text.chars().count()
    }
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
