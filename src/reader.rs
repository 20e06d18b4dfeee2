//! Reader session
//!
//! Wires the pieces together for one open chapter: the content model built
//! from the fetched chapter, the user's highlight list, selection capture,
//! highlight creation and deletion, reveal-and-flash, and debounced
//! progress reporting. Mutations never apply optimistic state; the session
//! refetches the highlight list after each one and keeps whatever the
//! backend returns.

use std::sync::Arc;
use std::time::Duration;

use crate::anchor::locator::{locate, span_at, FlashGuard, ScrollTarget};
use crate::anchor::resolver::resolve_offsets;
use crate::api::{ApiClient, Chapter};
use crate::config::ReaderConfig;
use crate::content::ContentModel;
use crate::error::Result;
use crate::highlight::{Highlight, NewHighlight};
use crate::progress::ProgressReporter;
use crate::selection::{capture_selection, ReaderSurface, SelectionCandidate};

/// An open chapter with its highlights and progress reporter.
pub struct ReaderSession {
    client: ApiClient,
    surface: Arc<dyn ReaderSurface>,
    chapter: Chapter,
    model: ContentModel,
    plain_text: String,
    highlights: Vec<Highlight>,
    flash: FlashGuard,
    progress: ProgressReporter,
}

impl std::fmt::Debug for ReaderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSession")
            .field("chapter", &self.chapter)
            .field("highlights", &self.highlights)
            .finish_non_exhaustive()
    }
}

impl ReaderSession {
    /// Open a chapter: fetch it, build the content model, and load the
    /// user's highlights.
    pub async fn open(
        config: &ReaderConfig,
        surface: Arc<dyn ReaderSurface>,
        chapter_id: &str,
    ) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        Self::open_with_client(client, surface, chapter_id, config.debounce_window()).await
    }

    /// Open with an existing client, for hosts that share one across pages.
    pub async fn open_with_client(
        client: ApiClient,
        surface: Arc<dyn ReaderSurface>,
        chapter_id: &str,
        progress_window: Duration,
    ) -> Result<Self> {
        let chapter = client.get_chapter(chapter_id).await?;
        let model = ContentModel::from_html(&chapter.content)?;
        let plain_text = model.plain_text();
        let highlights = client.list_highlights(chapter_id).await?;
        let progress = ProgressReporter::new(client.clone(), chapter_id, progress_window);

        Ok(ReaderSession {
            client,
            surface,
            chapter,
            model,
            plain_text,
            highlights,
            flash: FlashGuard::new(),
            progress,
        })
    }

    /// Override the transient-selection clear delay.
    pub fn with_flash_delay(mut self, delay: Duration) -> Self {
        self.flash = FlashGuard::with_delay(delay);
        self
    }

    pub fn chapter(&self) -> &Chapter {
        &self.chapter
    }

    pub fn content(&self) -> &ContentModel {
        &self.model
    }

    /// Plain-text rendering offsets are anchored against.
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    /// Current highlight list, as last fetched from the backend.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Validated selection candidate for the floating action menu, if the
    /// current selection qualifies.
    pub fn menu_candidate(&self) -> Option<SelectionCandidate> {
        capture_selection(self.surface.as_ref())
    }

    /// Persist the current selection as a highlight.
    ///
    /// Returns `Ok(None)` when no valid selection is active (the menu
    /// simply would not have been shown). Offsets are resolved from the
    /// untruncated selection; the stored quote is capped afterwards. On
    /// success the selection is cleared and the list refetched.
    pub async fn highlight_selection(&mut self) -> Result<Option<Highlight>> {
        let candidate = match capture_selection(self.surface.as_ref()) {
            Some(candidate) => candidate,
            None => return Ok(None),
        };

        let range = resolve_offsets(&candidate.text, &self.plain_text);
        let payload = NewHighlight::from_selection(&candidate.text, range.start, range.end);
        let created = self
            .client
            .create_highlight(&self.chapter.id, &payload)
            .await?;

        self.surface.clear_selection();
        self.refresh_highlights().await?;
        Ok(Some(created))
    }

    /// Delete a highlight and refetch the list.
    pub async fn remove_highlight(&mut self, highlight_id: &str) -> Result<()> {
        self.client.delete_highlight(highlight_id).await?;
        self.refresh_highlights().await
    }

    /// Refetch the highlight list. Last response wins; in-flight fetches
    /// are not cancelled.
    pub async fn refresh_highlights(&mut self) -> Result<()> {
        self.highlights = self.client.list_highlights(&self.chapter.id).await?;
        Ok(())
    }

    /// Scroll a stored highlight into view and flash it.
    ///
    /// Best-effort: an unknown id or an offset the current content no
    /// longer reaches is a silent no-op.
    pub fn reveal_highlight(&self, highlight_id: &str) {
        let highlight = match self.highlights.iter().find(|h| h.id == highlight_id) {
            Some(h) => h,
            None => return,
        };

        let position = match locate(&self.model, highlight.start_offset) {
            Some(p) => p,
            None => {
                tracing::debug!(
                    highlight_id,
                    start_offset = highlight.start_offset,
                    "highlight offset not reachable in current content"
                );
                return;
            }
        };

        self.surface.scroll_to(&ScrollTarget::for_position(position));
        let span = span_at(&self.model, position, highlight.quote_len());
        self.flash.flash(&self.surface, &span);
    }

    /// Record reading progress; the ping is debounced and fire-and-forget.
    pub fn report_progress(&self, percent: u8) {
        self.progress.record(percent);
    }
}
