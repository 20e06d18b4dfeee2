//! Selection capture
//!
//! The host exposes its global mutable selection through the narrow
//! [`ReaderSurface`] trait, so the capturer and locator can run against a
//! fake without a real render tree. Access is serialized by the host's
//! single UI thread; callers that consume a selection must remember to
//! clear it to avoid stale highlighting.

use crate::anchor::locator::{ScrollTarget, TextSpan};
use crate::highlight::{MAX_SELECTION_CHARS, MIN_SELECTION_CHARS};

/// How far above the selection the action menu is anchored, in pixels.
pub const MENU_RAISE_PX: f64 = 40.0;

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll position of the content container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// The host's current selection, as read from the rendering surface.
#[derive(Debug, Clone)]
pub struct RawSelection {
    /// Selected text, untrimmed
    pub text: String,
    /// Bounding rectangle of the selection in viewport coordinates
    pub bounds: Rect,
}

/// Container-relative anchor point for the floating action menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuAnchor {
    pub top: f64,
    pub left: f64,
}

/// A validated, positioned candidate highlight.
#[derive(Debug, Clone)]
pub struct SelectionCandidate {
    /// Trimmed selection text
    pub text: String,
    pub anchor: MenuAnchor,
}

/// Capability trait over the host's selection and scrolling.
///
/// The browser selection is a single global mutable resource; this trait is
/// the only way the crate touches it.
pub trait ReaderSurface: Send + Sync {
    /// Read the active selection, if any. Pure read; must not mutate it.
    fn current_selection(&self) -> Option<RawSelection>;

    /// Bounding rectangle of the chapter content container in viewport
    /// coordinates, or `None` when no content is mounted.
    fn container_bounds(&self) -> Option<Rect>;

    /// Current scroll position of the content container.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Clear the global selection.
    fn clear_selection(&self);

    /// Apply a transient visual selection covering `span`.
    fn select_span(&self, span: &TextSpan);

    /// Bring a position into the viewport.
    fn scroll_to(&self, target: &ScrollTarget);
}

/// Translate the current selection into a validated candidate.
///
/// Returns `None` when the selection is collapsed, the trimmed text falls
/// outside `[MIN_SELECTION_CHARS, MAX_SELECTION_CHARS]`, or no content
/// container is mounted. Does not clear the underlying selection.
pub fn capture_selection(surface: &dyn ReaderSurface) -> Option<SelectionCandidate> {
    let selection = surface.current_selection()?;
    if selection.text.is_empty() {
        return None;
    }

    let container = surface.container_bounds()?;
    let trimmed = selection.text.trim();
    let len = trimmed.chars().count();
    if !(MIN_SELECTION_CHARS..=MAX_SELECTION_CHARS).contains(&len) {
        return None;
    }

    let scroll = surface.scroll_offset();
    // Raise the anchor above the selection so the menu does not occlude it.
    let anchor = MenuAnchor {
        top: selection.bounds.top - container.top + scroll.y - MENU_RAISE_PX,
        left: selection.bounds.left - container.left + scroll.x,
    };

    Some(SelectionCandidate {
        text: trimmed.to_string(),
        anchor,
    })
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted surface for tests.

    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct FakeSurface {
        pub selection: Mutex<Option<RawSelection>>,
        pub container: Option<Rect>,
        pub scroll: ScrollOffset,
        pub cleared: Mutex<usize>,
        pub selected_spans: Mutex<Vec<TextSpan>>,
        pub scrolls: Mutex<Vec<ScrollTarget>>,
    }

    impl FakeSurface {
        pub fn with_selection(text: &str) -> Self {
            FakeSurface {
                selection: Mutex::new(Some(RawSelection {
                    text: text.to_string(),
                    bounds: Rect {
                        top: 240.0,
                        left: 60.0,
                        width: 180.0,
                        height: 18.0,
                    },
                })),
                container: Some(Rect {
                    top: 100.0,
                    left: 20.0,
                    width: 640.0,
                    height: 900.0,
                }),
                scroll: ScrollOffset { x: 0.0, y: 350.0 },
                ..Default::default()
            }
        }
    }

    impl ReaderSurface for FakeSurface {
        fn current_selection(&self) -> Option<RawSelection> {
            self.selection.lock().unwrap().clone()
        }

        fn container_bounds(&self) -> Option<Rect> {
            self.container
        }

        fn scroll_offset(&self) -> ScrollOffset {
            self.scroll
        }

        fn clear_selection(&self) {
            *self.selection.lock().unwrap() = None;
            *self.cleared.lock().unwrap() += 1;
        }

        fn select_span(&self, span: &TextSpan) {
            self.selected_spans.lock().unwrap().push(span.clone());
        }

        fn scroll_to(&self, target: &ScrollTarget) {
            self.scrolls.lock().unwrap().push(target.clone());
        }
    }
}
