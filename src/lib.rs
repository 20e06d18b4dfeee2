//! Fabula Reader Core
//!
//! The reader-side core of the Fabula serialized-fiction platform. Pages are
//! thin view glue; everything the chapter reader actually computes lives here:
//!
//! - capturing and validating text selections ([`selection`])
//! - anchoring a selected quote to stable character offsets and re-locating
//!   a stored offset in the current render ([`anchor`])
//! - the abstract content model the locator walks ([`content`])
//! - the typed client for the remote backend ([`api`])
//! - debounced reading-progress reporting ([`progress`])
//! - the [`reader::ReaderSession`] that wires it all together
//!
//! The host's rendering surface is injected through [`selection::ReaderSurface`],
//! so the whole crate runs without a real render tree.

pub mod anchor;
pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod highlight;
pub mod progress;
pub mod reader;
pub mod selection;

pub use api::{ApiClient, Chapter};
pub use config::ReaderConfig;
pub use content::ContentModel;
pub use error::{ReaderError, Result};
pub use highlight::{Highlight, NewHighlight};
pub use reader::ReaderSession;
pub use selection::{ReaderSurface, SelectionCandidate};
