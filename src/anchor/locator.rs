//! Offset location
//!
//! Walks the content model's text runs in document order to find the run
//! containing a stored offset, then surfaces it visually: scroll into view
//! with a fixed margin, apply a transient selection, clear it after a fixed
//! delay. Every miss is a silent no-op; stored offsets may be stale against
//! re-rendered content and there is no guard for that.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::content::ContentModel;
use crate::selection::ReaderSurface;

/// Upward margin when scrolling a highlight into the viewport, in pixels.
pub const SCROLL_MARGIN_PX: f64 = 100.0;

/// How long the transient flash selection stays before auto-clearing.
pub const FLASH_CLEAR_MS: u64 = 2000;

/// A resolved position: a run and a character offset within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPosition {
    pub run_index: usize,
    pub local_offset: usize,
}

/// A selection span within a single run, in local character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub run_index: usize,
    pub start: usize,
    pub end: usize,
}

/// Where and how the surface should scroll to reveal a position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTarget {
    pub position: TextPosition,
    pub margin_px: f64,
    pub smooth: bool,
}

impl ScrollTarget {
    pub fn for_position(position: TextPosition) -> Self {
        ScrollTarget {
            position,
            margin_px: SCROLL_MARGIN_PX,
            smooth: true,
        }
    }
}

/// Find the run containing `start_offset`.
///
/// Linear scan accumulating run lengths; the first run whose half-open
/// range `[running, running + len)` contains the offset wins. `None` when
/// the content is shorter than the offset, which callers treat as a no-op.
pub fn locate(model: &ContentModel, start_offset: usize) -> Option<TextPosition> {
    let mut running = 0usize;
    for (run_index, run) in model.runs().iter().enumerate() {
        let len = run.char_len();
        if start_offset < running + len {
            return Some(TextPosition {
                run_index,
                local_offset: start_offset - running,
            });
        }
        running += len;
    }
    None
}

/// Extend a located position into a span of `quote_len` characters,
/// clamped to the run's remaining length.
pub fn span_at(model: &ContentModel, position: TextPosition, quote_len: usize) -> TextSpan {
    let run_len = model.runs()[position.run_index].char_len();
    TextSpan {
        run_index: position.run_index,
        start: position.local_offset,
        end: (position.local_offset + quote_len).min(run_len),
    }
}

/// Transient flash selection with auto-clear.
///
/// A generation counter invalidates pending clears: re-flashing replaces
/// the active selection and turns the previous timer into a no-op, so two
/// reveals in quick succession never leave overlapping selections behind.
pub struct FlashGuard {
    generation: Arc<AtomicU64>,
    clear_after: Duration,
}

impl Default for FlashGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashGuard {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_millis(FLASH_CLEAR_MS))
    }

    pub fn with_delay(clear_after: Duration) -> Self {
        FlashGuard {
            generation: Arc::new(AtomicU64::new(0)),
            clear_after,
        }
    }

    /// Apply `span` as the surface's selection and schedule its clear.
    pub fn flash(&self, surface: &Arc<dyn ReaderSurface>, span: &TextSpan) {
        let current = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        surface.select_span(span);

        let generation = Arc::clone(&self.generation);
        let surface = Arc::clone(surface);
        let delay = self.clear_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == current {
                surface.clear_selection();
            }
        });
    }
}
