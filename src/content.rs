//! Chapter content model
//!
//! The locator never walks a live render tree. Instead the chapter is
//! reduced to an ordered sequence of text runs with known character lengths,
//! and the host adapts its actual content representation into that sequence.
//! For the common case (markdown rendered to HTML) this module builds the
//! sequence itself using lol_html streaming handlers.

use lol_html::{doc_text, element, rewrite_str, RewriteStrSettings};
use std::cell::RefCell;
use std::rc::Rc;

/// A single text run, roughly one rendered text node.
#[derive(Debug, Clone)]
pub struct TextRun {
    text: String,
    chars: usize,
}

impl TextRun {
    fn new(text: String) -> Self {
        let chars = text.chars().count();
        TextRun { text, chars }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.chars
    }
}

/// Ordered text runs of a rendered chapter.
#[derive(Debug, Clone, Default)]
pub struct ContentModel {
    runs: Vec<TextRun>,
    total_chars: usize,
}

/// Errors during content extraction
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("HTML rewrite failed: {0}")]
    RewriteError(String),
}

impl ContentModel {
    /// Build a model from rendered chapter HTML.
    ///
    /// `script` and `style` subtrees are dropped first, the way they never
    /// contribute to the rendered text, then every remaining text node
    /// becomes one run with its entities decoded.
    pub fn from_html(html: &str) -> Result<Self, ContentError> {
        let stripped = strip_non_content(html)?;

        let runs: Rc<RefCell<Vec<TextRun>>> = Rc::new(RefCell::new(Vec::new()));
        let pending: Rc<RefCell<String>> = Rc::new(RefCell::new(String::new()));

        let runs_ref = Rc::clone(&runs);
        let pending_ref = Rc::clone(&pending);

        rewrite_str(
            &stripped,
            RewriteStrSettings {
                document_content_handlers: vec![doc_text!(move |chunk| {
                    pending_ref.borrow_mut().push_str(chunk.as_str());
                    if chunk.last_in_text_node() {
                        let raw = std::mem::take(&mut *pending_ref.borrow_mut());
                        if !raw.is_empty() {
                            let decoded = html_escape::decode_html_entities(&raw).into_owned();
                            runs_ref.borrow_mut().push(TextRun::new(decoded));
                        }
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|e| ContentError::RewriteError(e.to_string()))?;

        let runs = Rc::try_unwrap(runs)
            .map_err(|_| ContentError::RewriteError("handler still borrowed".to_string()))?
            .into_inner();

        Ok(Self::collect(runs))
    }

    /// Build a model directly from text runs, for hosts whose render tree
    /// is not HTML.
    pub fn from_runs<I, S>(runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::collect(runs.into_iter().map(|s| TextRun::new(s.into())).collect())
    }

    fn collect(runs: Vec<TextRun>) -> Self {
        let total_chars = runs.iter().map(|r| r.chars).sum();
        ContentModel { runs, total_chars }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Total character count across all runs.
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// The plain-text rendering offsets are computed against: all runs
    /// concatenated in document order.
    pub fn plain_text(&self) -> String {
        let mut out = String::with_capacity(self.runs.iter().map(|r| r.text.len()).sum());
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }
}

/// Remove `script` and `style` elements so their contents never reach the
/// text pass.
fn strip_non_content(html: &str) -> Result<String, ContentError> {
    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("script", |el| {
                    el.remove();
                    Ok(())
                }),
                element!("style", |el| {
                    el.remove();
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| ContentError::RewriteError(e.to_string()))
}
